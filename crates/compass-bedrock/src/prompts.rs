use compass_core::models::generation::{GenerationKind, GenerationRequest};

const DAILY_SUMMARY: &str = "You are a supportive reflection coach. \
Read the user's journal entry for the given day and write a short, warm summary \
(two to four sentences) of what they reflected on. Speak to the user in the second person. \
Return only the summary text, with no heading, preamble, or quotation marks.";

const REFLECTION_QUESTION: &str = "You are a supportive reflection coach. \
Read the user's journal entry for the given day and ask exactly one open-ended question \
that helps them reflect further. Return only the question, with no preamble or quotation marks.";

pub fn system_prompt(kind: GenerationKind) -> &'static str {
    match kind {
        GenerationKind::DailySummary => DAILY_SUMMARY,
        GenerationKind::ReflectionQuestion => REFLECTION_QUESTION,
    }
}

/// The single user turn sent to the model.
pub fn user_message(req: &GenerationRequest) -> String {
    format!(
        "<day>{}</day>\n<journal_entry>\n{}\n</journal_entry>",
        req.date,
        req.free_text.trim_end()
    )
}
