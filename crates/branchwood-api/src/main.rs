//! Branchwood API server entry point.

use std::sync::Arc;
use std::time::Duration;

use branchwood_api::config::AppConfig;
use branchwood_api::error::AppError;
use branchwood_api::state::AppState;
use branchwood_core::clock::{Clock, SystemClock};
use branchwood_session::application::memory_store::InMemorySessionStore;
use branchwood_story::domain::story::Story;
use branchwood_story::sample::sample_story;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const PURGE_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    info!("Starting Branchwood API server");

    let config = AppConfig::from_env()?;
    let story = load_story(&config)?;
    info!(
        story_id = %story.id,
        title = %story.title,
        scenes = story.scene_count(),
        "story loaded"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let sessions = Arc::new(InMemorySessionStore::new(
        Arc::clone(&clock),
        config.session_ttl,
    ));
    spawn_session_purger(Arc::clone(&sessions));

    let app_state = AppState::new(Arc::new(story), sessions, clock, config.cookie_secure);
    let app = branchwood_api::build_router(app_state);

    // Start server.
    let addr = config.bind_addr()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

fn load_story(config: &AppConfig) -> Result<Story, AppError> {
    let story = match &config.story_path {
        Some(path) => {
            info!(path = %path.display(), "loading story");
            Story::from_yaml_file(path)?
        }
        None => {
            info!("STORY_PATH not set, serving the built-in sample story");
            sample_story()
        }
    };
    Ok(story.validated()?)
}

fn spawn_session_purger(sessions: Arc<InMemorySessionStore>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(err) = sessions.purge_expired() {
                warn!(error = %err, "failed to purge expired sessions");
            }
        }
    });
}
