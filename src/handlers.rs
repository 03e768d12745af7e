use crate::{
    AppState,
    models::{HealthResponse, QuestionAnswer, VersionInfo},
    pages,
};
use axum::{
    Form, Json,
    extract::{NestedPath, State},
    response::{Html, Redirect},
};

// --- Journey Handlers (mounted once per version) ---
//
// Every POST handler redirects with a bare, group-relative path. The group's
// `prefix_redirects` layer turns `/question-2` into `/v1/question-2`.

/// Logs which version and page received an answer. Answers can be free
/// text (names), so only whether one was given is recorded.
fn record_answer(version: &NestedPath, page: &str, answer: &QuestionAnswer) {
    tracing::info!(
        version = %version.as_str(),
        page,
        answered = answer.answer.as_deref().is_some_and(|a| !a.trim().is_empty()),
        "Answer submitted"
    );
}

pub async fn question_1_page() -> Html<&'static str> {
    Html(pages::QUESTION_1)
}

/// submit_question_1
///
/// First question of the journey. Continues to `/question-2`.
#[utoipa::path(
    post,
    path = "/{version}/question-1",
    params(("version" = String, Path, description = "Mounted version, e.g. v1")),
    request_body(content = QuestionAnswer, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to /{version}/question-2"))
)]
pub async fn submit_question_1(
    version: NestedPath,
    Form(answer): Form<QuestionAnswer>,
) -> Redirect {
    record_answer(&version, "question-1", &answer);
    Redirect::to("/question-2")
}

pub async fn question_2_page() -> Html<&'static str> {
    Html(pages::QUESTION_2)
}

#[utoipa::path(
    post,
    path = "/{version}/question-2",
    params(("version" = String, Path, description = "Mounted version, e.g. v1")),
    request_body(content = QuestionAnswer, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to /{version}/nested/question-1"))
)]
pub async fn submit_question_2(
    version: NestedPath,
    Form(answer): Form<QuestionAnswer>,
) -> Redirect {
    record_answer(&version, "question-2", &answer);
    Redirect::to("/nested/question-1")
}

pub async fn nested_question_1_page() -> Html<&'static str> {
    Html(pages::NESTED_QUESTION_1)
}

/// submit_nested_question_1
///
/// Nested pages redirect with their full group-relative path; depth makes no
/// difference to the prefixer.
#[utoipa::path(
    post,
    path = "/{version}/nested/question-1",
    params(("version" = String, Path, description = "Mounted version, e.g. v1")),
    request_body(content = QuestionAnswer, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to /{version}/nested/question-2"))
)]
pub async fn submit_nested_question_1(
    version: NestedPath,
    Form(answer): Form<QuestionAnswer>,
) -> Redirect {
    record_answer(&version, "nested/question-1", &answer);
    Redirect::to("/nested/question-2")
}

pub async fn nested_question_2_page() -> Html<&'static str> {
    Html(pages::NESTED_QUESTION_2)
}

#[utoipa::path(
    post,
    path = "/{version}/nested/question-2",
    params(("version" = String, Path, description = "Mounted version, e.g. v1")),
    request_body(content = QuestionAnswer, content_type = "application/x-www-form-urlencoded"),
    responses((status = 303, description = "Redirect to /{version}/check-answers"))
)]
pub async fn submit_nested_question_2(
    version: NestedPath,
    Form(answer): Form<QuestionAnswer>,
) -> Redirect {
    record_answer(&version, "nested/question-2", &answer);
    Redirect::to("/check-answers")
}

pub async fn check_answers_page() -> Html<&'static str> {
    Html(pages::CHECK_ANSWERS)
}

/// submit_check_answers
///
/// The check-answers form has no fields, so no body is extracted.
#[utoipa::path(
    post,
    path = "/{version}/check-answers",
    params(("version" = String, Path, description = "Mounted version, e.g. v1")),
    responses((status = 303, description = "Redirect to /{version}/confirmation"))
)]
pub async fn submit_check_answers(version: NestedPath) -> Redirect {
    tracing::info!(version = %version.as_str(), "Application sent");
    Redirect::to("/confirmation")
}

pub async fn confirmation_page() -> Html<&'static str> {
    Html(pages::CONFIRMATION)
}

// --- Public Handlers ---

/// health_check
///
/// Liveness probe. Also reports which versions this process mounted.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        started_at: state.started_at,
        versions: state
            .config
            .versions
            .iter()
            .map(|prefix| prefix.to_string())
            .collect(),
    })
}

/// list_versions
///
/// Lists every mounted version with the URL its journey starts at.
#[utoipa::path(
    get,
    path = "/versions",
    responses((status = 200, description = "Mounted versions", body = [VersionInfo]))
)]
pub async fn list_versions(State(state): State<AppState>) -> Json<Vec<VersionInfo>> {
    let versions = state
        .config
        .versions
        .iter()
        .map(|prefix| VersionInfo {
            prefix: prefix.to_string(),
            start_page: format!("{prefix}{}", pages::START_PAGE),
        })
        .collect();
    Json(versions)
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(pages::index(&state.config.versions))
}
