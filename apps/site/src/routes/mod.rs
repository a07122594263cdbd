pub mod health;
pub mod sections;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Static routes (/api/db, /api/personal, /api/health) take precedence
    // over the /:section capture.
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/db", get(sections::get_document))
        .route(
            "/api/personal",
            get(sections::get_personal)
                .put(sections::put_personal)
                .patch(sections::patch_personal),
        )
        .route(
            "/api/:section",
            get(sections::get_section)
                .post(sections::post_item)
                .put(sections::put_section),
        )
        .route(
            "/api/:section/:id",
            get(sections::get_item)
                .patch(sections::patch_item)
                .delete(sections::delete_item),
        )
        .with_state(state)
}
