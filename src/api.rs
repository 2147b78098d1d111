use crate::cache::SessionCache;
use crate::client::{FetchError, SessionClient};
use crate::pagination::{PageQuery, Pagination, PaginationError, paginate};
use crate::types::project;
use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

#[derive(Clone)]
pub struct AppState {
    pub client: SessionClient,
    pub cache: SessionCache,
}

/// Builds the session API router.
///
/// All three routes are GET-only; axum's method routing answers 405 for
/// anything else on a matched path.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", get(list_sessions))
        .route("/sessions/keys", get(list_session_keys))
        .route("/sessions/{id}", get(get_session))
        .with_state(state)
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("invalid session key in path")]
    InvalidSessionKey,
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no session with key {0}")]
    NotFound(u64),
    #[error("could not encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidSessionKey => (StatusCode::BAD_REQUEST, "invalid session key"),
            ApiError::Pagination(_) => (StatusCode::BAD_REQUEST, "invalid pagination parameters"),
            ApiError::Fetch(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error fetching sessions"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "session not found"),
            ApiError::Encode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error encoding response"),
        };

        // Raw error detail stays in the server logs; clients only see the
        // generic message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, message).into_response()
    }
}

/// Serializes the value up front, so an encoding failure surfaces as a clean
/// error response. Once a status line has been sent there is no way to
/// change it, so nothing is streamed before serialization succeeds.
fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// `GET /sessions` — the full upstream collection, optionally paginated.
async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let pagination = query.resolve()?;
    let sessions = state.client.fetch_sessions().await?;

    match pagination {
        Pagination::Page { skip, limit } => json_response(&paginate(&sessions, skip, limit)?),
        Pagination::All => {
            state.cache.insert_all(&sessions);
            json_response(&sessions)
        }
    }
}

/// `GET /sessions/{id}` — a single session by `session_key`.
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let session_key: u64 = id.parse().map_err(|_| ApiError::InvalidSessionKey)?;

    let sessions = state.client.fetch_sessions().await?;

    // The upstream has no indexed lookup; scan the full collection.
    let session = sessions
        .iter()
        .find(|s| s.session_key == session_key)
        .ok_or(ApiError::NotFound(session_key))?;

    json_response(session)
}

/// `GET /sessions/keys` — the keys-only projection, optionally paginated.
async fn list_session_keys(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let pagination = query.resolve()?;
    let sessions = state.client.fetch_sessions().await?;

    let keys = match pagination {
        Pagination::Page { skip, limit } => project(paginate(&sessions, skip, limit)?),
        Pagination::All => project(&sessions),
    };

    json_response(&keys)
}
