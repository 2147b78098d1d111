use crate::metrics_defs::{UPSTREAM_FETCH, UPSTREAM_FETCH_FAILED};
use crate::types::Session;
use http::StatusCode;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("upstream base URL is empty")]
    MissingBaseUrl,
    #[error("invalid upstream base URL: {0}")]
    InvalidUrl(String),
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    #[error("upstream returned status {0}")]
    UpstreamStatus(StatusCode),
    #[error("could not read upstream response body: {0}")]
    Body(reqwest::Error),
    #[error("could not decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the upstream sessions API.
///
/// Issues a single GET per call with no retries; callers decide what a
/// failure means for their request. No request timeout is configured, so a
/// hung upstream blocks the calling task until the connection is torn down.
#[derive(Clone)]
pub struct SessionClient {
    client: reqwest::Client,
    base_url: String,
}

impl SessionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        SessionClient {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the full session collection from `{base_url}/sessions`.
    ///
    /// Upstream array order is preserved verbatim; callers paginate against
    /// this order, which is only as stable as the upstream's own responses.
    pub async fn fetch_sessions(&self) -> Result<Vec<Session>, FetchError> {
        if self.base_url.is_empty() {
            return Err(FetchError::MissingBaseUrl);
        }

        let url = Url::parse(&format!("{}/sessions", self.base_url.trim_end_matches('/')))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        metrics::counter!(UPSTREAM_FETCH).increment(1);

        let response = self.client.get(url).send().await.map_err(|e| {
            metrics::counter!(UPSTREAM_FETCH_FAILED).increment(1);
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            metrics::counter!(UPSTREAM_FETCH_FAILED).increment(1);
            return Err(FetchError::UpstreamStatus(status));
        }

        // Read the body fully before decoding so read failures and decode
        // failures stay distinct.
        let body = response.bytes().await.map_err(FetchError::Body)?;
        let sessions = serde_json::from_slice(&body)?;

        Ok(sessions)
    }
}
