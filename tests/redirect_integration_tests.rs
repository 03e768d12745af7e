use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use prototype_versions::{AppConfig, AppState, MountPrefix, RouterExt, create_router};
use tower::util::ServiceExt;

// --- Test Utilities ---

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

fn app_with_versions(versions: &[&str]) -> Router {
    let config = AppConfig {
        versions: versions
            .iter()
            .map(|v| MountPrefix::parse(v).unwrap())
            .collect(),
        ..AppConfig::default()
    };
    create_router(AppState::new(config))
}

fn form_post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location")
        .to_str()
        .unwrap()
}

// --- Journey redirects through the real router ---

#[tokio::test]
async fn test_top_level_post_redirects_within_v2() {
    let response = app()
        .oneshot(form_post("/v2/question-1", "answer=Yes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/v2/question-2");
}

#[tokio::test]
async fn test_nested_post_redirects_within_v1() {
    let response = app()
        .oneshot(form_post("/v1/nested/question-1", "answer=Wales"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/v1/nested/question-2");
}

#[tokio::test]
async fn test_full_journey_stays_inside_each_version() {
    let journey = [
        ("/question-1", "answer=Yes", "/question-2"),
        ("/question-2", "answer=Ada+Lovelace", "/nested/question-1"),
        ("/nested/question-1", "answer=Scotland", "/nested/question-2"),
        ("/nested/question-2", "answer=Email", "/check-answers"),
        ("/check-answers", "", "/confirmation"),
    ];

    for version in ["/v1", "/v2"] {
        for (page, body, next) in journey {
            let response = app()
                .oneshot(form_post(&format!("{version}{page}"), body))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::SEE_OTHER, "{version}{page}");
            assert_eq!(location(&response), format!("{version}{next}"));
        }
    }
}

#[tokio::test]
async fn test_versions_never_cross_redirect() {
    let app = app_with_versions(&["v1", "v2", "v10"]);

    for version in ["/v1", "/v2", "/v10"] {
        let response = app
            .clone()
            .oneshot(form_post(&format!("{version}/question-1"), "answer=No"))
            .await
            .unwrap();
        let target = location(&response);

        assert!(target.starts_with(&format!("{version}/")), "{target} left {version}");
        for other in ["/v1/", "/v2/", "/v10/"] {
            if other != format!("{version}/") {
                assert!(!target.starts_with(other), "{target} leaked into {other}");
            }
        }
    }
}

#[tokio::test]
async fn test_get_pages_are_served_under_every_version() {
    for uri in ["/v1/question-1", "/v2/nested/question-2", "/v2/confirmation"] {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_unknown_routes_fall_through_to_not_found() {
    for uri in ["/v3/question-1", "/question-1", "/v1/missing"] {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

// --- Middleware edge cases on a hand-built group ---

fn edge_case_group() -> Router {
    let group = Router::new()
        .route("/already", post(|| async { Redirect::to("/v1/question-2") }))
        .route("/external", post(|| async { Redirect::to("https://example.com/start") }))
        .route("/relative", post(|| async { Redirect::to("question-2") }))
        .route("/permanent", post(|| async { Redirect::permanent("/question-2") }))
        .route(
            "/not-modified",
            get(|| async { StatusCode::NOT_MODIFIED.into_response() }),
        )
        .route(
            "/created",
            post(|| async { (StatusCode::CREATED, [(header::LOCATION, "/items/1")]) }),
        )
        .within_group();

    Router::new()
        .nest("/v1", group)
        .merge(
            Router::new()
                .route("/outside", post(|| async { Redirect::to("/question-2") }))
                .within_group(),
        )
}

async fn post_location(uri: &str) -> (StatusCode, Option<String>) {
    let response = edge_case_group()
        .oneshot(form_post(uri, ""))
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_already_prefixed_redirect_is_not_doubled() {
    let (_, target) = post_location("/v1/already").await;
    assert_eq!(target.as_deref(), Some("/v1/question-2"));
}

#[tokio::test]
async fn test_external_and_relative_redirects_pass_through() {
    let (_, target) = post_location("/v1/external").await;
    assert_eq!(target.as_deref(), Some("https://example.com/start"));

    let (_, target) = post_location("/v1/relative").await;
    assert_eq!(target.as_deref(), Some("question-2"));
}

#[tokio::test]
async fn test_every_redirect_status_is_rewritten() {
    let (status, target) = post_location("/v1/permanent").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(target.as_deref(), Some("/v1/question-2"));
}

#[tokio::test]
async fn test_non_redirect_location_is_left_alone() {
    let (status, target) = post_location("/v1/created").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(target.as_deref(), Some("/items/1"));
}

#[tokio::test]
async fn test_redirect_status_without_location_is_left_alone() {
    let response = edge_case_group()
        .oneshot(
            Request::builder()
                .uri("/v1/not-modified")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_router_outside_any_group_is_untouched() {
    let (_, target) = post_location("/outside").await;
    assert_eq!(target.as_deref(), Some("/question-2"));
}

// --- Logging ---

/// Collects formatted log output for assertions.
#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_submitted_answers_are_not_logged() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let response = app()
        .oneshot(form_post("/v1/question-2", "answer=Ada+Lovelace"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("Answer submitted"), "{output}");
    assert!(output.contains("answered=true"), "{output}");
    assert!(!output.contains("Lovelace"), "{output}");
}
