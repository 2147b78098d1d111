use crate::types::Session;

/// Builds a session with plausible upstream data derived from the key.
pub fn session(session_key: u64, circuit_short_name: &str) -> Session {
    Session {
        circuit_key: session_key % 100,
        circuit_short_name: circuit_short_name.to_string(),
        country_code: "ITA".to_string(),
        country_key: 13,
        country_name: "Italy".to_string(),
        date_end: "2023-09-01T14:00:00+00:00".to_string(),
        date_start: "2023-09-01T12:30:00+00:00".to_string(),
        location: circuit_short_name.to_string(),
        meeting_key: 1200 + session_key % 100,
        session_key,
        session_name: "Practice 1".to_string(),
        session_type: "Practice".to_string(),
        year: 2023,
    }
}

/// The two-session collection used across unit and end-to-end tests.
pub fn sample_sessions() -> Vec<Session> {
    vec![session(9158, "Monza"), session(9159, "Baku")]
}
