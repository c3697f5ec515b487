//! POST /analyze/ — resume upload + job description, keyword or AI analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::matching::matcher::{match_skills, MatchResult};
use crate::matching::summary::compose_suggestion;
use crate::state::AppState;

/// JSON body of every `/analyze/` response. Validation and extraction
/// failures keep the flat `{"error": ...}` shape with HTTP 200 that this
/// endpoint has always produced.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Error { error: String },
    Ai(AiAnalysisResponse),
    Keyword(KeywordAnalysisResponse),
}

/// AI-path result. `match_score` here is the model's 0–100 integer rating;
/// the keyword path reports a two-decimal float instead. The mismatch is
/// carried over from the original API surface on purpose.
#[derive(Debug, Serialize)]
pub struct AiAnalysisResponse {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub match_score: u32,
    pub ai_summary: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordAnalysisResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub ai_summary: String,
}

struct AnalyzeForm {
    filename: String,
    resume_bytes: Bytes,
    job_description: String,
    use_ai: bool,
}

/// POST /analyze/
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;

    if !form.filename.ends_with(".pdf") {
        return Ok(Json(AnalyzeResponse::Error {
            error: "Resume must be a PDF file.".to_string(),
        }));
    }

    let resume_text = match state.extractor.extract(&form.resume_bytes, &form.filename) {
        Ok(text) => text,
        Err(e) => {
            return Ok(Json(AnalyzeResponse::Error {
                error: e.to_string(),
            }))
        }
    };

    let jd_text = form.job_description;

    if form.use_ai {
        let analysis = state.summarizer.summarize(&resume_text, &jd_text).await;
        return Ok(Json(AnalyzeResponse::Ai(AiAnalysisResponse {
            matched_keywords: analysis.matched_skills,
            missing_keywords: analysis.missing_skills,
            match_score: analysis.rating_percent,
            ai_summary: analysis.summary,
        })));
    }

    let result = match_skills(&state.phrases, &resume_text, &jd_text);
    let ai_summary = compose_suggestion(&result.missing_keywords);
    Ok(Json(AnalyzeResponse::Keyword(KeywordAnalysisResponse {
        result,
        ai_summary,
    })))
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut filename = None;
    let mut resume_bytes = None;
    let mut job_description = None;
    let mut use_ai = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                filename = field.file_name().map(str::to_string);
                resume_bytes = Some(field.bytes().await?);
            }
            "job_description" => job_description = Some(field.text().await?),
            "use_ai" => use_ai = parse_form_bool(&field.text().await?),
            _ => {}
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;
    let filename = filename
        .ok_or_else(|| AppError::Validation("'resume' field has no filename".to_string()))?;
    let job_description = job_description
        .ok_or_else(|| AppError::Validation("missing 'job_description' field".to_string()))?;

    Ok(AnalyzeForm {
        filename,
        resume_bytes,
        job_description,
        use_ai,
    })
}

/// Form-style boolean coercion: "true", "1", "yes", "on" in any case.
fn parse_form_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
