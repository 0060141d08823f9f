//! Axum route handlers for the analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::analysis::review::{improve_bullet, review_resume};
use crate::errors::AppError;
use crate::extraction::{extract_text_from_bytes, SourceFormat};
use crate::matching::suggestions::generate_suggestions;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Weighted overlap score, 0 to 100, two decimals.
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub resume_text: String,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct ImproveBulletRequest {
    pub bullet_text: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveBulletResponse {
    pub improved: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Keyword match on already-extracted text. Texts are lowercase-normalized
/// here so the engine always sees canonical document text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text cannot be empty".to_string()));
    }

    let resume_text = request.resume_text.to_lowercase();
    let job_text = request.job_text.to_lowercase();

    Ok(Json(build_analysis(&state, &job_text, &resume_text)))
}

/// POST /api/v1/analyze/upload
///
/// Multipart variant: `resume` and `job` file fields, each a PDF or plain
/// text document. Extraction failures surface as 422 rather than producing a
/// silent zero-score result.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut job_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart payload: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let format = field
            .file_name()
            .map(SourceFormat::from_file_name)
            .unwrap_or(SourceFormat::PlainText);
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read field '{name}': {e}")))?;

        let text = extract_text_from_bytes(&data, format)?;
        match name.as_str() {
            "resume" => resume_text = Some(text),
            "job" => job_text = Some(text),
            other => {
                return Err(AppError::Validation(format!("unexpected field '{other}'")));
            }
        }
    }

    let resume_text =
        resume_text.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;
    let job_text =
        job_text.ok_or_else(|| AppError::Validation("missing 'job' file field".to_string()))?;

    Ok(Json(build_analysis(&state, &job_text, &resume_text)))
}

/// POST /api/v1/analyze/review
///
/// Qualitative AI review of a resume against a job description.
pub async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text cannot be empty".to_string()));
    }

    let review = review_resume(
        &request.resume_text.to_lowercase(),
        &request.job_text.to_lowercase(),
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(ReviewResponse { review }))
}

/// POST /api/v1/bullets/improve
///
/// Rewrites a single resume bullet. The bullet is passed through verbatim;
/// casing matters to the rewrite, so no normalization here.
pub async fn handle_improve_bullet(
    State(state): State<AppState>,
    Json(request): Json<ImproveBulletRequest>,
) -> Result<Json<ImproveBulletResponse>, AppError> {
    let bullet = request.bullet_text.trim();
    if bullet.is_empty() {
        return Err(AppError::Validation("bullet_text cannot be empty".to_string()));
    }

    let improved = improve_bullet(bullet, state.generator.as_ref()).await?;

    Ok(Json(ImproveBulletResponse { improved }))
}

/// Runs the matching engine and shapes the response: sorted lists plus one
/// suggestion per missing item.
fn build_analysis(state: &AppState, job_text: &str, resume_text: &str) -> AnalyzeResponse {
    let result = state.matcher.calculate_match(job_text, resume_text);
    let suggestions = generate_suggestions(&result.missing);

    AnalyzeResponse {
        score: result.score,
        matched: result.matched.into_iter().collect(),
        missing: result.missing.into_iter().collect(),
        suggestions,
    }
}
