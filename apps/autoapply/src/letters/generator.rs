//! Cover letter generator — pluggable, trait-based so the runner can be
//! exercised without a network.
//!
//! Default: `LlmLetterGenerator` (one Claude call per job, no retry).

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use crate::letters::prompts::{COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM};
use crate::llm_client::prompts::PLAIN_TEXT_INSTRUCTION;
use crate::llm_client::LlmClient;
use crate::models::profile::CandidateProfile;

/// Inputs for one cover letter.
#[derive(Debug, Clone, Copy)]
pub struct CoverLetterRequest<'a> {
    pub job_description: &'a str,
    pub profile: &'a CandidateProfile,
    pub tone: &'a str,
}

/// Produces cover-letter text for a job. An empty letter is a valid result.
#[async_trait]
pub trait LetterGenerator: Send + Sync {
    async fn generate(&self, request: &CoverLetterRequest<'_>) -> Result<String, AppError>;
}

pub struct LlmLetterGenerator {
    llm: LlmClient,
}

impl LlmLetterGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl LetterGenerator for LlmLetterGenerator {
    async fn generate(&self, request: &CoverLetterRequest<'_>) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(request)?;

        let response = self
            .llm
            .call(&prompt, COVER_LETTER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

        // No text block means the model produced nothing; that is an empty letter, not an error.
        let letter = response.text().unwrap_or_default().trim().to_string();
        debug!("Generated cover letter ({} chars)", letter.len());
        Ok(letter)
    }
}

/// Fills the cover letter template. The job description goes in last so
/// braces inside a scraped posting are never mistaken for placeholders.
fn build_cover_letter_prompt(request: &CoverLetterRequest<'_>) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(request.profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize profile: {e}")))?;

    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{output_instruction}", PLAIN_TEXT_INSTRUCTION)
        .replace("{tone}", request.tone)
        .replace("{profile}", &profile_json)
        .replace("{job}", request.job_description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile() -> CandidateProfile {
        CandidateProfile {
            name: "Ada Lovelace".to_string(),
            highlights: vec!["Figma".to_string(), "prototyping".to_string()],
        }
    }

    #[test]
    fn test_prompt_contains_job_profile_and_tone() {
        let profile = profile();
        let request = CoverLetterRequest {
            job_description: "We need a Product Designer experienced in Figma.",
            profile: &profile,
            tone: "professional, confident",
        };
        let prompt = build_cover_letter_prompt(&request).unwrap();

        assert!(prompt.contains("We need a Product Designer experienced in Figma."));
        assert!(prompt.contains("\"name\": \"Ada Lovelace\""));
        assert!(prompt.contains("\"prototyping\""));
        assert!(prompt.contains("Tone: professional, confident"));
        assert!(prompt.contains("Do NOT add a preamble"));
        assert!(!prompt.contains("{job}"));
        assert!(!prompt.contains("{output_instruction}"));
    }

    #[test]
    fn test_placeholders_inside_job_description_survive() {
        let profile = profile();
        let request = CoverLetterRequest {
            job_description: "Template engineers welcome: {tone} {profile}",
            profile: &profile,
            tone: "warm",
        };
        let prompt = build_cover_letter_prompt(&request).unwrap();
        assert!(prompt.contains("Template engineers welcome: {tone} {profile}"));
    }

    async fn generator_replying(template: ResponseTemplate) -> (MockServer, LlmLetterGenerator) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        let llm = LlmClient::with_base_url("sk-test".to_string(), &server.uri());
        (server, LlmLetterGenerator::new(llm))
    }

    #[tokio::test]
    async fn test_generated_letter_is_trimmed() {
        let (_server, generator) = generator_replying(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "content": [{"type": "text", "text": "\n  Dear hiring team,\n\nHello.  \n"}],
                "usage": {"input_tokens": 40, "output_tokens": 6}
            }),
        ))
        .await;

        let profile = profile();
        let letter = generator
            .generate(&CoverLetterRequest {
                job_description: "Product Designer",
                profile: &profile,
                tone: "warm",
            })
            .await
            .unwrap();
        assert_eq!(letter, "Dear hiring team,\n\nHello.");
    }

    #[tokio::test]
    async fn test_reply_without_text_is_empty_letter() {
        let (_server, generator) = generator_replying(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"content": [], "usage": {"input_tokens": 40, "output_tokens": 0}}),
        ))
        .await;

        let profile = profile();
        let letter = generator
            .generate(&CoverLetterRequest {
                job_description: "Product Designer",
                profile: &profile,
                tone: "warm",
            })
            .await
            .unwrap();
        assert!(letter.is_empty());
    }

    #[tokio::test]
    async fn test_api_failure_is_llm_error() {
        let (_server, generator) =
            generator_replying(ResponseTemplate::new(429).set_body_string("rate limited")).await;

        let profile = profile();
        let err = generator
            .generate(&CoverLetterRequest {
                job_description: "Product Designer",
                profile: &profile,
                tone: "warm",
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(ref msg) if msg.contains("rate limited")));
    }
}
