//! Branchwood — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use branchwood_core::error::NarrativeError;
use branchwood_session::application::store::SessionStoreError;
use branchwood_story::error::StoryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story could not be loaded or failed validation.
    #[error("story error: {0}")]
    Story(#[from] StoryError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Errors a request handler can return. Implements `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The engine rejected the request or the story is defective.
    #[error(transparent)]
    Narrative(#[from] NarrativeError),

    /// The request carries no session cookie, or the session has expired.
    #[error("no active game session")]
    NoActiveSession,

    /// The CSRF header is missing or does not match the session's token.
    #[error("CSRF token missing or incorrect")]
    CsrfFailed,

    /// The request body could not be read as the expected JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The endpoint does not accept the request's method.
    #[error("POST required")]
    MethodNotAllowed,

    /// The session store failed.
    #[error(transparent)]
    SessionStore(#[from] SessionStoreError),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Narrative(err) => match err {
                NarrativeError::MalformedSession(_) => {
                    (StatusCode::BAD_REQUEST, "malformed_session")
                }
                NarrativeError::UnknownScene(_) => (StatusCode::BAD_REQUEST, "invalid_scene"),
                NarrativeError::UnknownChoice { .. } => {
                    (StatusCode::BAD_REQUEST, "invalid_choice")
                }
                NarrativeError::DanglingTarget { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "dangling_target")
                }
            },
            Self::NoActiveSession => (StatusCode::BAD_REQUEST, "no_active_session"),
            Self::CsrfFailed => (StatusCode::FORBIDDEN, "csrf_failed"),
            Self::InvalidJson(_) => (StatusCode::BAD_REQUEST, "invalid_json"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
            Self::SessionStore(_) => (StatusCode::INTERNAL_SERVER_ERROR, "session_store_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        match &self {
            Self::Narrative(err) if err.is_authoring_defect() => {
                error!(error = %err, "story defect reached at runtime");
            }
            _ if status.is_server_error() => {
                error!(error = %self, code = error_code, "request failed");
            }
            _ => {}
        }

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use branchwood_core::ids::{ChoiceId, SceneId};

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        let response = err.into().into_response();
        response.status()
    }

    #[test]
    fn test_malformed_session_maps_to_400() {
        assert_eq!(
            status_of(NarrativeError::MalformedSession("missing field".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_scene_and_choice_map_to_400() {
        assert_eq!(
            status_of(NarrativeError::UnknownScene(SceneId(9))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(NarrativeError::UnknownChoice {
                scene_id: SceneId(0),
                choice_id: ChoiceId(9),
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_dangling_target_maps_to_500() {
        assert_eq!(
            status_of(NarrativeError::DanglingTarget {
                scene_id: SceneId(0),
                choice_id: ChoiceId(1),
                target: SceneId(42),
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_transport_errors_map_to_their_statuses() {
        assert_eq!(status_of(ApiError::NoActiveSession), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::CsrfFailed), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(ApiError::InvalidJson("expected value".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::MethodNotAllowed),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_session_store_failure_maps_to_500() {
        assert_eq!(
            status_of(SessionStoreError::Unavailable("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_codes_distinguish_scene_from_choice() {
        let scene = ApiError::from(NarrativeError::UnknownScene(SceneId(9)));
        let choice = ApiError::from(NarrativeError::UnknownChoice {
            scene_id: SceneId(0),
            choice_id: ChoiceId(9),
        });

        assert_eq!(scene.status_and_code().1, "invalid_scene");
        assert_eq!(choice.status_and_code().1, "invalid_choice");
    }
}
