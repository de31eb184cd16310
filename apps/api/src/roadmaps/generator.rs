//! AI roadmap generation — builds the prompt and makes the single
//! generateContent call.
//!
//! Failure policy: upstream errors are rendered into the returned text
//! ("❌ Error: ...") instead of propagating. The page shows whatever
//! string comes back in the roadmap box, so a failed call still produces
//! something displayable.

use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::roadmaps::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

/// Builds the generation prompt, embedding the three inputs verbatim.
fn build_prompt(experience_years: &str, background: &str, goal: &str) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("{experience}", experience_years)
        .replace("{domain}", background)
        .replace("{goal}", goal)
}

/// Requests an AI-generated roadmap for the given inputs.
///
/// Returns the model's text unmodified on success, or a displayable
/// `"❌ Error: ..."` string on any failure. Never returns `Err` — callers
/// validate inputs before invoking this.
pub async fn generate_roadmap(
    experience_years: &str,
    background: &str,
    goal: &str,
    generator: &dyn TextGenerator,
) -> String {
    let prompt = build_prompt(experience_years, background, goal);

    info!("Requesting AI roadmap (goal: {goal})");

    match generator.generate(&prompt, ROADMAP_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Roadmap generation failed: {e}");
            format!("❌ Error: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Returns the prompt it was given, for asserting on embedding.
    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok(prompt.to_string())
        }
    }

    /// Fails every call, simulating an API outage.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    #[test]
    fn test_build_prompt_embeds_inputs_verbatim() {
        let prompt = build_prompt("3+", "BSc, Python learner", "Data Scientist");
        assert!(prompt.starts_with("I have 3+ years of experience in BSc, Python learner"));
        assert!(prompt.contains("I want to become a Data Scientist"));
        assert!(prompt.contains("Job titles to aim for"));
    }

    #[tokio::test]
    async fn test_generate_returns_response_text_unmodified() {
        let text = generate_roadmap("2", "Banking", "Product Manager", &EchoGenerator).await;
        assert!(text.starts_with("I have 2 years of experience in Banking"));
    }

    #[tokio::test]
    async fn test_generate_failure_returns_displayable_error_string() {
        let text = generate_roadmap("0", "BSc", "AI Engineer", &FailingGenerator).await;
        assert!(
            text.starts_with("❌ Error: "),
            "failure must render as a displayable error string, got: {text}"
        );
        assert!(text.contains("model overloaded"));
    }
}
