use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A stored prompt from the mentor question bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MentorQuestion {
    pub id: Uuid,
    pub question: String,
    /// Category label the question belongs to.
    pub pillar: String,
    #[serde(default)]
    pub sub_tags: Vec<String>,
    pub date_added: jiff::Timestamp,
}

/// A question as submitted for insertion. Every field may be absent on the
/// wire; [`NewMentorQuestion::into_record`] decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewMentorQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub pillar: Option<String>,
    #[serde(default)]
    pub sub_tags: Vec<String>,
    #[serde(default)]
    pub date_added: Option<jiff::Timestamp>,
}

impl NewMentorQuestion {
    pub fn new(question: impl Into<String>, pillar: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            pillar: Some(pillar.into()),
            ..Self::default()
        }
    }

    pub fn with_sub_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Build the canonical record. `question` and `pillar` must be present
    /// and non-blank; `dateAdded` falls back to `now`. Sub-tags keep their
    /// order, with blank entries dropped.
    pub fn into_record(self, now: jiff::Timestamp) -> Result<MentorQuestion, CoreError> {
        let question = required(self.question, "question")?;
        let pillar = required(self.pillar, "pillar")?;
        let sub_tags = self
            .sub_tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(MentorQuestion {
            id: Uuid::new_v4(),
            question,
            pillar,
            sub_tags,
            date_added: self.date_added.unwrap_or(now),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, CoreError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CoreError::MissingField(field.to_string()))
}
