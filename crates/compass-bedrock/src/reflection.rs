use tracing::{info, warn};
use uuid::Uuid;

use compass_core::models::generation::{GenerationKind, GenerationRequest, GenerationResponse};

use crate::error::BedrockError;
use crate::generator::{Generator, TokenUsage};
use crate::prompts;

/// A completed generation call, ready to be returned and recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub id: Uuid,
    pub kind: GenerationKind,
    pub model_id: String,
    pub usage: TokenUsage,
    pub response: GenerationResponse,
}

/// Run one generation of `kind` for an already-validated request.
///
/// Model output is trimmed and stripped of wrapping quotes; output that is
/// empty after that is [`BedrockError::EmptyOutput`].
pub async fn generate(
    generator: &dyn Generator,
    kind: GenerationKind,
    req: &GenerationRequest,
) -> Result<GenerationOutcome, BedrockError> {
    let id = Uuid::new_v4();
    info!(transaction_id = %id, kind = ?kind, date = %req.date, "starting generation");

    let generation = generator
        .generate(prompts::system_prompt(kind), &prompts::user_message(req))
        .await
        .inspect_err(|e| warn!(transaction_id = %id, error = %e, "generation failed"))?;

    let text = clean(&generation.text);
    if text.is_empty() {
        warn!(transaction_id = %id, "generation returned empty output");
        return Err(BedrockError::EmptyOutput);
    }

    info!(
        transaction_id = %id,
        model = %generation.model_id,
        input_tokens = generation.usage.input,
        output_tokens = generation.usage.output,
        "generation complete"
    );

    Ok(GenerationOutcome {
        id,
        kind,
        model_id: generation.model_id,
        usage: generation.usage,
        response: GenerationResponse { summary: text },
    })
}

fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    let unquoted = match trimmed.strip_prefix('"') {
        Some("") => "",
        Some(rest) => rest.strip_suffix('"').unwrap_or(trimmed),
        None => trimmed,
    };
    unquoted.trim().to_string()
}
