//! Routes for playing through the story.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use branchwood_core::ids::{ChoiceId, SceneId};
use branchwood_core::variables::Variables;
use branchwood_narrative::application::{command_handlers, query_handlers};
use branchwood_narrative::domain::commands::TakeChoice;
use branchwood_narrative::domain::outcome::{EndingSummary, Outcome, ScenePresentation};
use branchwood_narrative::domain::visibility::VisibleChoice;
use branchwood_session::application::store::{SessionId, StoredSession};
use branchwood_session::domain::record::resume_session;
use branchwood_session::domain::state::PlayerSessionState;

use crate::cookies::{self, SESSION_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    /// The selected choice.
    pub choice_id: ChoiceId,
    /// The scene the client is acting from.
    pub current_scene_id: SceneId,
}

/// The scene part of a scene response.
#[derive(Debug, Serialize)]
pub struct SceneView {
    /// Scene id.
    pub id: SceneId,
    /// Opaque background reference.
    pub background: String,
    /// Offered choices.
    pub choices: Vec<VisibleChoice>,
}

/// Response body for a scene the player can act in.
#[derive(Debug, Serialize)]
pub struct SceneResponse {
    /// Token to echo in the `X-CSRF-Token` header.
    pub csrf_token: String,
    /// The current scene.
    pub scene: SceneView,
    /// The session's variables.
    pub variables: Variables,
}

impl SceneResponse {
    fn new(presentation: ScenePresentation, csrf_token: String) -> Self {
        Self {
            csrf_token,
            scene: SceneView {
                id: presentation.scene_id,
                background: presentation.background,
                choices: presentation.choices,
            },
            variables: presentation.variables,
        }
    }
}

/// Response body once an ending is reached.
#[derive(Debug, Serialize)]
pub struct EndingResponse {
    /// Always `true`.
    pub ending: bool,
    /// The story's closing message.
    pub message: String,
    /// The session's variables at the end.
    pub final_variables: Variables,
    /// Scenes left on the way, oldest first.
    pub path: Vec<SceneId>,
}

impl From<EndingSummary> for EndingResponse {
    fn from(summary: EndingSummary) -> Self {
        Self {
            ending: true,
            message: summary.message,
            final_variables: summary.final_variables,
            path: summary.path,
        }
    }
}

fn render(outcome: Outcome, csrf_token: String) -> Response {
    match outcome {
        Outcome::Continue(presentation) => {
            Json(SceneResponse::new(presentation, csrf_token)).into_response()
        }
        Outcome::Ending(summary) => Json(EndingResponse::from(summary)).into_response(),
    }
}

fn stored(app_state: &AppState, session: &PlayerSessionState, csrf_token: String) -> StoredSession {
    StoredSession {
        record: session.to_record().to_value(),
        csrf_token,
        touched_at: app_state.clock.now(),
    }
}

async fn load_active_session(
    app_state: &AppState,
    headers: &HeaderMap,
) -> Result<(SessionId, StoredSession), ApiError> {
    let session_id = cookies::read_cookie(headers, SESSION_COOKIE)
        .and_then(|raw| raw.parse::<SessionId>().ok())
        .ok_or(ApiError::NoActiveSession)?;
    let session = app_state
        .sessions
        .load(session_id)
        .await?
        .ok_or(ApiError::NoActiveSession)?;
    Ok((session_id, session))
}

/// GET|POST /start
#[instrument(skip_all)]
async fn start(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let story = &app_state.story;
    let session = command_handlers::start_session(story);
    let outcome = query_handlers::present_scene(story, &session)?;

    if let Some(previous) =
        cookies::read_cookie(&headers, SESSION_COOKIE).and_then(|raw| raw.parse::<SessionId>().ok())
    {
        app_state.sessions.remove(previous).await?;
    }

    let session_id = SessionId::new_random();
    let csrf_token = cookies::generate_csrf_token();
    app_state
        .sessions
        .save(session_id, stored(&app_state, &session, csrf_token.clone()))
        .await?;

    info!(%session_id, story_id = %story.id, "started session");

    let set_cookies = AppendHeaders([
        (
            SET_COOKIE,
            cookies::session_cookie(&session_id.to_string(), app_state.cookie_secure),
        ),
        (
            SET_COOKIE,
            cookies::csrf_cookie(&csrf_token, app_state.cookie_secure),
        ),
    ]);

    Ok((set_cookies, render(outcome, csrf_token)))
}

/// POST /choice
#[instrument(skip_all)]
async fn choose(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChoiceRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let (session_id, stored_session) = load_active_session(&app_state, &headers).await?;

    if !cookies::csrf_header_matches(&headers, &stored_session.csrf_token) {
        warn!(%session_id, "rejected choice with bad CSRF token");
        return Err(ApiError::CsrfFailed);
    }

    let Json(request) = payload.map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))?;

    let command = TakeChoice {
        scene_id: request.current_scene_id,
        choice_id: request.choice_id,
    };
    info!(
        %session_id,
        scene_id = %command.scene_id,
        choice_id = %command.choice_id,
        "handling take_choice command"
    );

    let session = resume_session(stored_session.record)?;
    let transition = command_handlers::apply_choice(&app_state.story, &session, &command)?;

    app_state
        .sessions
        .save(
            session_id,
            stored(
                &app_state,
                &transition.state,
                stored_session.csrf_token.clone(),
            ),
        )
        .await?;

    if transition.outcome.is_ending() {
        info!(%session_id, scene_id = %transition.state.current_scene_id(), "session reached an ending");
    }

    Ok(render(transition.outcome, stored_session.csrf_token))
}

/// GET /current
#[instrument(skip_all)]
async fn current(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let (session_id, stored_session) = load_active_session(&app_state, &headers).await?;
    let session = resume_session(stored_session.record)?;
    let outcome = query_handlers::present_scene(&app_state.story, &session)?;

    info!(%session_id, scene_id = %session.current_scene_id(), "presenting current scene");

    Ok(render(outcome, stored_session.csrf_token))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Returns the router for playing the story.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", get(start).post(start))
        .route("/choice", post(choose).fallback(method_not_allowed))
        .route("/current", get(current))
}
