use crate::{AppState, handlers, redirect::RouterExt};
use axum::{Router, routing::get};

/// Prototype Router Module
///
/// One version's journey. `create_router` nests a fresh copy of this router
/// under every configured prefix, so `/v1/question-1` and `/v2/question-1`
/// are served by the same handlers.
///
/// Redirect scoping:
/// The whole group is wrapped by `prefix_redirects` (via `within_group`).
/// Handlers redirect to bare paths such as `/question-2` and the layer adds
/// whichever prefix the request was routed through, so one version can never
/// send a client into another.
pub fn version_routes() -> Router<AppState> {
    Router::new()
        // GET/POST /question-1 -> /question-2
        .route(
            "/question-1",
            get(handlers::question_1_page).post(handlers::submit_question_1),
        )
        // GET/POST /question-2 -> /nested/question-1
        .route(
            "/question-2",
            get(handlers::question_2_page).post(handlers::submit_question_2),
        )
        // GET/POST /nested/question-1 -> /nested/question-2
        .route(
            "/nested/question-1",
            get(handlers::nested_question_1_page).post(handlers::submit_nested_question_1),
        )
        // GET/POST /nested/question-2 -> /check-answers
        .route(
            "/nested/question-2",
            get(handlers::nested_question_2_page).post(handlers::submit_nested_question_2),
        )
        // GET/POST /check-answers -> /confirmation
        .route(
            "/check-answers",
            get(handlers::check_answers_page).post(handlers::submit_check_answers),
        )
        // GET /confirmation
        // End of the journey.
        .route("/confirmation", get(handlers::confirmation_page))
        .within_group()
}
