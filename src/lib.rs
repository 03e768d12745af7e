use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
};
use chrono::{DateTime, Utc};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod prefix;
pub mod redirect;

// Public endpoints and the per-version route group.
pub mod routes;
use routes::{prototype, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use errors::{ConfigError, PrefixError};
pub use prefix::{MountPrefix, prefix_target, rewrite_target};
pub use redirect::{RouterExt, prefix_redirects};

/// ApiDoc
///
/// OpenAPI document for the public JSON endpoints and the per-version form
/// posts, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check, handlers::list_versions,
        handlers::submit_question_1, handlers::submit_question_2,
        handlers::submit_nested_question_1, handlers::submit_nested_question_2,
        handlers::submit_check_answers,
    ),
    components(
        schemas(models::QuestionAnswer, models::HealthResponse, models::VersionInfo)
    ),
    tags(
        (name = "prototype-versions", description = "Versioned prototype journeys")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared, immutable state. Holds nothing a request can change: the prefix a
/// request belongs to comes from its own routing context, never from here.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            started_at: Utc::now(),
        }
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Mounts one copy of the version route group per configured prefix, merges
/// the public routes and wraps everything in the observability stack.
///
/// Prefixes come from `AppConfig`, which has already rejected duplicate,
/// reserved and mutually nested prefixes, so the `nest` calls below cannot
/// overlap.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let mut base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes());

    // Static mount registration: each version is attached once, here.
    for prefix in &state.config.versions {
        tracing::info!(prefix = %prefix, "Mounting prototype version");
        base_router = base_router.nest(prefix.as_str(), prototype::version_routes());
    }

    base_router
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span for `TraceLayer`, correlating every log line of a request by its
/// `x-request-id`.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
