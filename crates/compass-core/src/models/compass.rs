use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::generation::GenerationKind;

/// One user's reflection for one calendar day, plus whatever has been
/// generated from it so far. Backs the `compassView` query family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompassEntry {
    pub date: String,
    pub free_text: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    pub updated_at: jiff::Timestamp,
}

impl CompassEntry {
    pub fn new(date: String, free_text: String, now: jiff::Timestamp) -> Self {
        Self {
            date,
            free_text,
            summary: None,
            question: None,
            updated_at: now,
        }
    }

    /// Record generated output. The reflection text is replaced as well,
    /// since the output was derived from it.
    pub fn apply(
        &mut self,
        kind: GenerationKind,
        free_text: String,
        output: String,
        now: jiff::Timestamp,
    ) {
        self.free_text = free_text;
        match kind {
            GenerationKind::DailySummary => self.summary = Some(output),
            GenerationKind::ReflectionQuestion => self.question = Some(output),
        }
        self.updated_at = now;
    }
}
