use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Input to both daily-summary and reflection-question generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GenerationRequest {
    /// Calendar day, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub free_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerationResponse {
    pub summary: String,
}

/// Which kind of derived text a generation call produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GenerationKind {
    DailySummary,
    ReflectionQuestion,
}
