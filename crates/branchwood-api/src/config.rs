//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::TimeDelta;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// YAML story to serve. `None` serves the built-in sample story.
    pub story_path: Option<PathBuf>,
    /// Idle time after which a session expires.
    pub session_ttl: TimeDelta,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let story_path = lookup("STORY_PATH")
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let session_ttl = match lookup("SESSION_TTL_SECS") {
            Some(raw) => parse_ttl(&raw)?,
            None => TimeDelta::seconds(DEFAULT_SESSION_TTL_SECS),
        };

        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_flag("COOKIE_SECURE", &raw)?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            story_path,
            session_ttl,
            cookie_secure,
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_ttl(raw: &str) -> Result<TimeDelta, AppError> {
    let secs: i64 = raw
        .parse()
        .map_err(|e| AppError::Config(format!("SESSION_TTL_SECS must be an integer: {e}")))?;
    if secs <= 0 {
        return Err(AppError::Config(
            "SESSION_TTL_SECS must be positive".to_string(),
        ));
    }
    TimeDelta::try_seconds(secs)
        .ok_or_else(|| AppError::Config("SESSION_TTL_SECS is out of range".to_string()))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{name} must be true or false, got {raw:?}"
        ))),
    }
}
