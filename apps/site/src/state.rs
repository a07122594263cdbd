use crate::store::ResumeStore;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
}
