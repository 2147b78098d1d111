// Best-effort record of sessions seen on recent fetches. Nothing on the
// request path reads it back; it exists so the process keeps a view of
// recently served sessions.
use crate::metrics_defs::CACHED_SESSIONS;
use crate::types::Session;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Mutex-guarded map of the most recently fetched sessions, keyed by
/// `session_key`. Cloning the handle shares the underlying map.
///
/// Entries are replaced wholesale on insert (last writer per key wins) and
/// never evicted, so the map grows with the number of distinct session keys
/// the upstream has ever returned.
#[derive(Clone, Default)]
pub struct SessionCache {
    inner: Arc<Mutex<HashMap<u64, Session>>>,
}

impl SessionCache {
    pub fn new() -> Self {
        SessionCache::default()
    }

    /// Upserts every session in the slice. The lock is held only for the map
    /// mutation, never across network I/O.
    pub fn insert_all(&self, sessions: &[Session]) {
        let mut map = self.inner.lock();
        for session in sessions {
            map.insert(session.session_key, session.clone());
        }
        let len = map.len();
        drop(map);

        metrics::gauge!(CACHED_SESSIONS).set(len as f64);
    }

    pub fn get(&self, session_key: u64) -> Option<Session> {
        self.inner.lock().get(&session_key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{sample_sessions, session};

    #[test]
    fn insert_all_keys_by_session_key() {
        let cache = SessionCache::new();
        let sessions = sample_sessions();

        cache.insert_all(&sessions);

        assert_eq!(cache.len(), sessions.len());
        for s in &sessions {
            assert_eq!(cache.get(s.session_key).as_ref(), Some(s));
        }
        assert_eq!(cache.get(1), None);
    }

    #[test]
    fn last_write_per_key_wins() {
        let cache = SessionCache::new();

        cache.insert_all(&[session(9158, "Monza")]);
        cache.insert_all(&[session(9158, "Baku")]);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(9158).unwrap().circuit_short_name, "Baku");
    }

    #[test]
    fn concurrent_writers_do_not_corrupt_the_map() {
        let cache = SessionCache::new();
        let writers: u64 = 8;
        // Overlapping key sets: writer w covers keys [w, w + 16).
        let distinct_keys: u64 = writers + 16 - 1;

        std::thread::scope(|scope| {
            for w in 0..writers {
                let cache = cache.clone();
                scope.spawn(move || {
                    let batch: Vec<_> =
                        (w..w + 16).map(|key| session(key, "Monza")).collect();
                    for _ in 0..50 {
                        cache.insert_all(&batch);
                    }
                });
            }
        });

        assert_eq!(cache.len(), distinct_keys as usize);
        for key in 0..distinct_keys {
            assert_eq!(cache.get(key).unwrap().session_key, key);
        }
    }
}
