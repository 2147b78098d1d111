//! Metric names for the session service.
//!
//! Recorded through the `metrics` facade; a StatsD recorder is installed at
//! startup when the config carries a statsd endpoint, otherwise recording is
//! a no-op.

/// Upstream fetch attempts.
pub const UPSTREAM_FETCH: &str = "upstream.fetch";

/// Upstream fetches that failed before yielding a decoded collection.
pub const UPSTREAM_FETCH_FAILED: &str = "upstream.fetch.failed";

/// Number of distinct sessions currently held in the cache.
pub const CACHED_SESSIONS: &str = "cache.sessions";
