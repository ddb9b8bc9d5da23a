//! Axum route handlers for the Skill-Gap API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::gap::SkillSet;
use crate::analysis::report::{analyze, AnalysisResult};
use crate::document::DocumentKind;
use crate::errors::AppError;
use crate::preprocess::clean_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/domains
pub async fn handle_list_domains(State(state): State<AppState>) -> Json<DomainsResponse> {
    Json(DomainsResponse {
        domains: state.taxonomy.domain_names().map(str::to_string).collect(),
    })
}

/// POST /api/v1/skills/extract
///
/// Finds taxonomy skills mentioned in already-extracted resume text.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let skills = extract_from_text(&state, &request.text);
    Ok(Json(ExtractResponse {
        success: true,
        skills,
    }))
}

/// POST /api/v1/skills/upload
///
/// Accepts a resume as multipart field `file` (PDF, DOCX or plain text) and returns
/// the taxonomy skills found in it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            AppError::UnprocessableEntity(format!(
                "Unsupported file type for '{filename}' (expected .pdf, .docx, .txt or .md)"
            ))
        })?;
        let bytes = field.bytes().await?;
        info!("Received resume upload '{filename}' ({} bytes)", bytes.len());

        let text = kind.extract_text(bytes.to_vec()).await?;
        let skills = extract_from_text(&state, &text);
        return Ok(Json(ExtractResponse {
            success: true,
            skills,
        }));
    }

    Err(AppError::Validation("No file".to_string()))
}

/// POST /api/v1/analyze
///
/// Scores the candidate's skills against the requested domain and suggests
/// an alternative domain when one fits better than the threshold.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalysisResult> {
    let skills: SkillSet = request.skills.iter().collect();
    let mut result = analyze(&state.taxonomy, &skills, &request.domain);
    info!(
        "Analyzed {} skills against '{}': {:.1}%",
        skills.len(),
        result.domain,
        result.score
    );

    result.score = (result.score * 100.0).round() / 100.0;
    Json(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn extract_from_text(state: &AppState, raw: &str) -> Vec<String> {
    let cleaned = clean_text(raw);
    state.extractor.extract(&cleaned).into_iter().collect()
}
