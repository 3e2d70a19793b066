//! Cookie and CSRF token helpers.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Cookie holding the session id.
pub const SESSION_COOKIE: &str = "branchwood_session";

/// Cookie mirroring the CSRF token for browser clients.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header a client must echo the CSRF token in on state-changing requests.
pub const CSRF_HEADER: &str = "x-csrf-token";

const CSRF_TOKEN_LEN: usize = 32;

/// Returns the value of cookie `name` from the request's `Cookie` headers.
#[must_use]
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Builds the `Set-Cookie` value for the session id.
#[must_use]
pub fn session_cookie(value: &str, secure: bool) -> String {
    let mut cookie = format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds the `Set-Cookie` value for the CSRF token. Readable by scripts.
#[must_use]
pub fn csrf_cookie(token: &str, secure: bool) -> String {
    let mut cookie = format!("{CSRF_COOKIE}={token}; Path=/; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Generates a fresh CSRF token.
#[must_use]
pub fn generate_csrf_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CSRF_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Returns `true` if the request's CSRF header matches `expected`.
#[must_use]
pub fn csrf_header_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|presented| presented == expected)
}
