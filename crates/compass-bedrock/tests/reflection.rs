use std::sync::Mutex;

use async_trait::async_trait;
use compass_bedrock::error::BedrockError;
use compass_bedrock::generator::{Generation, Generator, TokenUsage};
use compass_bedrock::{prompts, reflection};
use compass_core::models::generation::{GenerationKind, GenerationRequest};
use pretty_assertions::assert_eq;

/// Replies with a canned result and remembers what it was asked.
struct CannedGenerator {
    reply: Result<&'static str, &'static str>,
    calls: Mutex<Vec<(String, String)>>,
}

impl CannedGenerator {
    fn replying(text: &'static str) -> Self {
        Self {
            reply: Ok(text),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            reply: Err(message),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Generation, BedrockError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));
        match self.reply {
            Ok(text) => Ok(Generation {
                model_id: "stub-model".to_string(),
                text: text.to_string(),
                usage: TokenUsage { input: 12, output: 7 },
            }),
            Err(message) => Err(BedrockError::Invocation(message.to_string())),
        }
    }
}

fn request() -> GenerationRequest {
    GenerationRequest {
        date: "2024-01-01".to_string(),
        free_text: "Today I felt...".to_string(),
    }
}

#[tokio::test]
async fn summary_is_returned_trimmed() {
    let generator = CannedGenerator::replying("  You reflected on gratitude.\n");

    let outcome = reflection::generate(&generator, GenerationKind::DailySummary, &request())
        .await
        .unwrap();

    assert_eq!(outcome.response.summary, "You reflected on gratitude.");
    assert_eq!(outcome.model_id, "stub-model");
    assert_eq!(outcome.usage.total(), 19);
}

#[tokio::test]
async fn prompt_matches_generation_kind() {
    let generator = CannedGenerator::replying("What made today meaningful?");

    reflection::generate(&generator, GenerationKind::ReflectionQuestion, &request())
        .await
        .unwrap();

    let calls = generator.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        prompts::system_prompt(GenerationKind::ReflectionQuestion)
    );
    assert!(calls[0].1.contains("<day>2024-01-01</day>"));
    assert!(calls[0].1.contains("Today I felt..."));
}

#[tokio::test]
async fn blank_output_is_an_error() {
    let generator = CannedGenerator::replying("   ");
    let err = reflection::generate(&generator, GenerationKind::DailySummary, &request())
        .await
        .unwrap_err();
    assert!(matches!(err, BedrockError::EmptyOutput));
}

#[tokio::test]
async fn lone_quote_output_is_an_error() {
    let generator = CannedGenerator::replying(" \" ");
    let err = reflection::generate(&generator, GenerationKind::ReflectionQuestion, &request())
        .await
        .unwrap_err();
    assert!(matches!(err, BedrockError::EmptyOutput));
}

#[tokio::test]
async fn provider_failure_propagates() {
    let generator = CannedGenerator::failing("throttled");
    let err = reflection::generate(&generator, GenerationKind::DailySummary, &request())
        .await
        .unwrap_err();
    assert!(matches!(err, BedrockError::Invocation(m) if m == "throttled"));
}
