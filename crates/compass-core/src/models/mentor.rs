use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// "Become a mentor" expression of interest.
///
/// Required strings default to empty on the wire so that a missing field
/// reaches the validator as a field error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MentorInterestForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub career_stage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MentorInterestSubmission {
    pub id: Uuid,
    pub form: MentorInterestForm,
    pub submitted_at: jiff::Timestamp,
}
