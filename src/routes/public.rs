use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints that live outside every version group. Paths here are reserved:
/// configuration refuses a version mounted on any of them.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // Landing page linking to the first question of each mounted version.
        .route("/", get(handlers::index))
        // GET /health
        // Liveness probe for load balancers; lists the mounted versions.
        .route("/health", get(handlers::health_check))
        // GET /versions
        // JSON list of mounted versions and their start pages.
        .route("/versions", get(handlers::list_versions))
}
