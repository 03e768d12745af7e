use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Request Payloads (Input Schemas) ---

/// QuestionAnswer
///
/// The urlencoded body posted by every question page. Prototype pages are
/// throwaway, so the answer is optional and never validated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct QuestionAnswer {
    #[schema(example = "Yes")]
    pub answer: Option<String>,
}

// --- Response Payloads (Output Schemas) ---

/// HealthResponse
///
/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub started_at: DateTime<Utc>,
    /// Mount prefixes currently served, in configuration order.
    pub versions: Vec<String>,
}

/// VersionInfo
///
/// One entry of `GET /versions`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct VersionInfo {
    #[schema(example = "/v1")]
    pub prefix: String,
    #[schema(example = "/v1/question-1")]
    pub start_page: String,
}
