//! AI analysis path — delegates matching, scoring, and summary text to a
//! remote model.
//!
//! Degradation contract: the three completions (matched skills, missing
//! skills, rating+summary) parse independently, so a malformed response only
//! blanks its own field. A transport failure on any call collapses the whole
//! analysis into an "AI error: ..." result. Summarizing never fails the
//! request and never retries.

pub mod prompts;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::summarizer::prompts::{
    MATCHED_SKILLS_PROMPT, MISSING_SKILLS_PROMPT, RATING_SUMMARY_PROMPT,
};

/// Result of the AI analysis path. Always well-formed; failures degrade into
/// empty lists, a zero rating, and a diagnostic summary.
#[derive(Debug, Clone)]
pub struct AiAnalysis {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub rating_percent: u32,
    pub summary: String,
}

/// Parse outcome for model output. Malformed output is a value, not an
/// exception, so each field degrades on its own.
pub enum ModelJson<T> {
    Parsed(T),
    ParseFailed,
}

/// Rating + prose summary returned by the third completion. Missing keys
/// fall back to zero / empty rather than failing the parse.
#[derive(Debug, Deserialize)]
struct RatingSummary {
    #[serde(default)]
    rating_percent: u32,
    #[serde(default)]
    summary: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, resume_text: &str, jd_text: &str) -> AiAnalysis;
}

/// Production summarizer backed by the shared LLM client.
pub struct LlmSummarizer {
    llm: LlmClient,
}

impl LlmSummarizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn run(&self, resume_text: &str, jd_text: &str) -> Result<AiAnalysis, LlmError> {
        let matched_skills = match parse_model_json::<Vec<String>>(
            &self
                .ask_with(MATCHED_SKILLS_PROMPT, resume_text, jd_text)
                .await?,
        ) {
            ModelJson::Parsed(skills) => skills,
            ModelJson::ParseFailed => Vec::new(),
        };

        let missing_skills = match parse_model_json::<Vec<String>>(
            &self
                .ask_with(MISSING_SKILLS_PROMPT, resume_text, jd_text)
                .await?,
        ) {
            ModelJson::Parsed(skills) => skills,
            ModelJson::ParseFailed => Vec::new(),
        };

        let (rating_percent, summary) = match parse_model_json::<RatingSummary>(
            &self
                .ask_with(RATING_SUMMARY_PROMPT, resume_text, jd_text)
                .await?,
        ) {
            ModelJson::Parsed(rating) => (rating.rating_percent, rating.summary),
            ModelJson::ParseFailed => (0, "Failed to parse AI summary.".to_string()),
        };

        Ok(AiAnalysis {
            matched_skills,
            missing_skills,
            rating_percent,
            summary,
        })
    }

    async fn ask_with(
        &self,
        template: &str,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<String, LlmError> {
        let prompt = template
            .replace("{jd_text}", jd_text)
            .replace("{resume_text}", resume_text);
        self.llm.ask(&prompt).await
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, resume_text: &str, jd_text: &str) -> AiAnalysis {
        match self.run(resume_text, jd_text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!("AI analysis degraded: {e}");
                ai_error(&e)
            }
        }
    }
}

/// The fully-degraded result used when any remote call fails.
pub fn ai_error(error: &LlmError) -> AiAnalysis {
    AiAnalysis {
        matched_skills: Vec::new(),
        missing_skills: Vec::new(),
        rating_percent: 0,
        summary: format!("AI error: {error}"),
    }
}

/// Parses model output as JSON after stripping optional markdown fences.
pub fn parse_model_json<T: DeserializeOwned>(text: &str) -> ModelJson<T> {
    let text = strip_json_fences(text);
    match serde_json::from_str(text) {
        Ok(value) => ModelJson::Parsed(value),
        Err(e) => {
            warn!("Model returned malformed JSON: {e}");
            ModelJson::ParseFailed
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn parses_skill_array() {
        let ModelJson::Parsed(skills) = parse_model_json::<Vec<String>>(r#"["Python", "AWS"]"#)
        else {
            panic!("expected parsed array");
        };
        assert_eq!(skills, vec!["Python", "AWS"]);
    }

    #[test]
    fn parses_fenced_rating_summary() {
        let input = "```json\n{\"rating_percent\": 72, \"summary\": \"Solid fit.\"}\n```";
        let ModelJson::Parsed(rating) = parse_model_json::<RatingSummary>(input) else {
            panic!("expected parsed rating");
        };
        assert_eq!(rating.rating_percent, 72);
        assert_eq!(rating.summary, "Solid fit.");
    }

    #[test]
    fn prose_output_is_a_parse_failure() {
        let result = parse_model_json::<Vec<String>>("I think the candidate is a good fit.");
        assert!(matches!(result, ModelJson::ParseFailed));
    }

    #[test]
    fn rating_summary_defaults_for_missing_keys() {
        let ModelJson::Parsed(rating) = parse_model_json::<RatingSummary>("{}") else {
            panic!("expected parsed rating");
        };
        assert_eq!(rating.rating_percent, 0);
        assert_eq!(rating.summary, "");
    }

    #[test]
    fn ai_error_result_is_empty_with_diagnostic_summary() {
        let analysis = ai_error(&LlmError::EmptyContent);
        assert!(analysis.matched_skills.is_empty());
        assert!(analysis.missing_skills.is_empty());
        assert_eq!(analysis.rating_percent, 0);
        assert!(analysis.summary.starts_with("AI error: "));
    }
}
