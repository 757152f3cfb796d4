use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The scoring engine is stateless, so only configuration lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
