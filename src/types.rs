use serde::{Deserialize, Serialize};

/// One timed event session at a circuit, as served by the upstream
/// `/sessions` endpoint. Field names match the upstream wire format.
///
/// `date_start` and `date_end` are upstream-formatted text and are never
/// interpreted as timestamps by this service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub circuit_key: u64,
    pub circuit_short_name: String,
    pub country_code: String,
    pub country_key: u64,
    pub country_name: String,
    pub date_end: String,
    pub date_start: String,
    pub location: String,
    pub meeting_key: u64,
    pub session_key: u64,
    pub session_name: String,
    pub session_type: String,
    pub year: u64,
}

/// Reduced view of a [`Session`] exposing only the identifying and locator
/// fields. Built per response, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionKeysOnly {
    pub session_key: u64,
    pub circuit_key: u64,
    pub meeting_key: u64,
    pub circuit_short_name: String,
    pub date_range: String,
}

impl From<&Session> for SessionKeysOnly {
    fn from(session: &Session) -> Self {
        SessionKeysOnly {
            session_key: session.session_key,
            circuit_key: session.circuit_key,
            meeting_key: session.meeting_key,
            circuit_short_name: session.circuit_short_name.clone(),
            date_range: format!("{} - {}", session.date_start, session.date_end),
        }
    }
}

/// Maps every session to its keys-only view, preserving order.
pub fn project(sessions: &[Session]) -> Vec<SessionKeysOnly> {
    sessions.iter().map(SessionKeysOnly::from).collect()
}
