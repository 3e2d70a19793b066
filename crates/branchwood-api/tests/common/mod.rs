//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use branchwood_core::clock::Clock;
use branchwood_session::application::memory_store::InMemorySessionStore;
use branchwood_session::application::store::SessionStore;
use branchwood_story::domain::story::Story;
use branchwood_test_support::FixedClock;
use chrono::TimeDelta;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use branchwood_api::build_router;
use branchwood_api::cookies::{CSRF_HEADER, SESSION_COOKIE};
use branchwood_api::state::AppState;

/// Build the full app router serving `story` from an in-memory session store
/// on a fixed clock. Uses the same router as `main.rs`.
pub fn build_test_app(story: Story) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::reference());
    let sessions = Arc::new(InMemorySessionStore::new(
        Arc::clone(&clock),
        TimeDelta::hours(1),
    ));
    build_router(AppState::new(Arc::new(story), sessions, clock, false))
}

/// Build the full app router with a custom session store.
pub fn build_test_app_with_store(story: Story, sessions: Arc<dyn SessionStore>) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::reference());
    build_router(AppState::new(Arc::new(story), sessions, clock, false))
}

/// A response reduced to what the tests inspect.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    /// Every `Set-Cookie` value, in order.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect()
    }

    /// The `name=value` pair of the session cookie, ready for a `Cookie`
    /// header.
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookies()
            .into_iter()
            .find(|cookie| cookie.starts_with(&format!("{SESSION_COOKIE}=")))
            .map(|cookie| cookie.split(';').next().unwrap().to_string())
    }
}

/// Send `request` and collect the response.
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Send a request with an optional cookie, CSRF header and raw body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    csrf_token: Option<&str>,
    body: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    if let Some(token) = csrf_token {
        builder = builder.header(CSRF_HEADER, token);
    }
    let body = match body {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };

    send(app, builder.body(body).unwrap()).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = request(app, Method::GET, uri, None, None, None).await;
    (response.status, response.json)
}

/// A client that keeps its session cookie and CSRF token between requests.
pub struct Player {
    pub app: Router,
    pub cookie: String,
    pub csrf_token: String,
}

impl Player {
    /// Start a session and return the player with the start response.
    pub async fn start(app: Router) -> (Self, TestResponse) {
        let response = request(app.clone(), Method::POST, "/api/start", None, None, None).await;
        assert_eq!(response.status, StatusCode::OK, "start failed: {}", response.json);
        let player = Self {
            app,
            cookie: response.session_cookie().unwrap(),
            csrf_token: response.json["csrf_token"].as_str().unwrap().to_string(),
        };
        (player, response)
    }

    /// POST /api/choice with the player's credentials.
    pub async fn choose(&self, scene_id: i64, choice_id: i64) -> TestResponse {
        let body = json!({ "choice_id": choice_id, "current_scene_id": scene_id });
        self.post_choice(body.to_string()).await
    }

    /// POST /api/choice with a raw body.
    pub async fn post_choice(&self, body: String) -> TestResponse {
        request(
            self.app.clone(),
            Method::POST,
            "/api/choice",
            Some(&self.cookie),
            Some(&self.csrf_token),
            Some(body),
        )
        .await
    }

    /// GET /api/current with the player's cookie.
    pub async fn current(&self) -> TestResponse {
        request(
            self.app.clone(),
            Method::GET,
            "/api/current",
            Some(&self.cookie),
            None,
            None,
        )
        .await
    }
}
