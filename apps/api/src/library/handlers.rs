//! Axum route handlers for the Library API.
//!
//! All records are keyed by an externally supplied `user_id` — authentication
//! stays delegated to the identity provider in front of this service.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::library::{CoverLetterRow, RatingRow, ResumeRow};
use crate::models::profile::{Profile, ProfileRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub candidate_address: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub portfolio_url: String,
    #[serde(default = "default_length_label")]
    pub default_length: String,
    #[serde(default = "default_tone_label")]
    pub default_tone: String,
}

fn default_length_label() -> String {
    "concise".to_string()
}

fn default_tone_label() -> String {
    "conversational".to_string()
}

/// GET /api/v1/profile
///
/// Returns the user's saved profile, or the defaults when none exists yet —
/// a fresh account renders the same form as a saved one.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Profile>, AppError> {
    let row: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?;

    Ok(Json(row.map(Profile::from).unwrap_or_default()))
}

/// PUT /api/v1/profile
///
/// Upserts the user's profile row.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileUpdateRequest>,
) -> Result<Json<Profile>, AppError> {
    let existing: Option<ProfileRow> = sqlx::query_as("SELECT * FROM profiles WHERE user_id = $1")
        .bind(req.user_id)
        .fetch_optional(&state.db)
        .await?;

    if existing.is_some() {
        sqlx::query(
            r#"
            UPDATE profiles
            SET candidate_name = $1, candidate_address = $2, linkedin_url = $3,
                github_url = $4, portfolio_url = $5, default_length = $6,
                default_tone = $7, updated_at = $8
            WHERE user_id = $9
            "#,
        )
        .bind(&req.candidate_name)
        .bind(&req.candidate_address)
        .bind(&req.linkedin_url)
        .bind(&req.github_url)
        .bind(&req.portfolio_url)
        .bind(&req.default_length)
        .bind(&req.default_tone)
        .bind(Utc::now())
        .bind(req.user_id)
        .execute(&state.db)
        .await?;
    } else {
        sqlx::query(
            r#"
            INSERT INTO profiles
                (user_id, candidate_name, candidate_address, linkedin_url,
                 github_url, portfolio_url, default_length, default_tone, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(req.user_id)
        .bind(&req.candidate_name)
        .bind(&req.candidate_address)
        .bind(&req.linkedin_url)
        .bind(&req.github_url)
        .bind(&req.portfolio_url)
        .bind(&req.default_length)
        .bind(&req.default_tone)
        .bind(Utc::now())
        .execute(&state.db)
        .await?;
    }

    Ok(Json(Profile {
        candidate_name: req.candidate_name,
        candidate_address: req.candidate_address,
        linkedin_url: req.linkedin_url,
        github_url: req.github_url,
        portfolio_url: req.portfolio_url,
        default_length: req.default_length,
        default_tone: req.default_tone,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume library
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    pub resume_name: String,
    pub resume_address: String,
    pub resume_text: String,
}

/// GET /api/v1/resumes
///
/// Lists the user's saved resumes, newest first.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let resumes: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY date_saved DESC")
            .bind(params.user_id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(resumes))
}

/// POST /api/v1/resumes
///
/// Saves a resume into the user's library.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    for (value, name) in [
        (&req.resume_name, "resume_name"),
        (&req.resume_address, "resume_address"),
        (&req.resume_text, "resume_text"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} cannot be empty")));
        }
    }

    let row = ResumeRow {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        resume_name: req.resume_name,
        resume_address: req.resume_address,
        resume_text: req.resume_text,
        date_saved: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO resumes (id, user_id, resume_name, resume_address, resume_text, date_saved)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.resume_name)
    .bind(&row.resume_address)
    .bind(&row.resume_text)
    .bind(row.date_saved)
    .execute(&state.db)
    .await?;

    info!("Saved resume '{}' for user {}", row.resume_name, row.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes/latest
///
/// Returns the most recently saved resume, used to pre-fill the form.
pub async fn handle_latest_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume: Option<ResumeRow> = sqlx::query_as(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY date_saved DESC LIMIT 1",
    )
    .bind(params.user_id)
    .fetch_optional(&state.db)
    .await?;

    let resume =
        resume.ok_or_else(|| AppError::NotFound("No saved resumes for this user".to_string()))?;
    Ok(Json(resume))
}

// ────────────────────────────────────────────────────────────────────────────
// Cover-letter history
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveCoverLetterRequest {
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
    pub cover_letter: String,
}

/// GET /api/v1/cover-letters
///
/// Lists the user's saved cover letters, newest first.
pub async fn handle_list_cover_letters(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<CoverLetterRow>>, AppError> {
    let letters: Vec<CoverLetterRow> =
        sqlx::query_as("SELECT * FROM cover_letters WHERE user_id = $1 ORDER BY date_created DESC")
            .bind(params.user_id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(letters))
}

/// POST /api/v1/cover-letters
///
/// Saves a generated letter into the user's history. This is the explicit
/// persistence step taken after generation reaches `done`.
pub async fn handle_save_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<SaveCoverLetterRequest>,
) -> Result<(StatusCode, Json<CoverLetterRow>), AppError> {
    if req.cover_letter.trim().is_empty() {
        return Err(AppError::Validation("cover_letter cannot be empty".to_string()));
    }

    let row = CoverLetterRow {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        company: req.company,
        role: req.role,
        cover_letter: req.cover_letter,
        date_created: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO cover_letters (id, user_id, company, role, cover_letter, date_created)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.company)
    .bind(&row.role)
    .bind(&row.cover_letter)
    .bind(row.date_created)
    .execute(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/v1/cover-letters/:id
///
/// Deletes one letter from the user's history. Scoped by user_id so one user
/// cannot delete another's records.
pub async fn handle_delete_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM cover_letters WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(params.user_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Cover letter {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/cover-letters/:id/download
///
/// Streams the letter as a `.txt` attachment named after the company.
pub async fn handle_download_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let letter: Option<CoverLetterRow> =
        sqlx::query_as("SELECT * FROM cover_letters WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    let letter =
        letter.ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!(
                    "attachment; filename=\"{}\"",
                    download_file_name(&letter.company)
                ),
            ),
        ],
        letter.cover_letter,
    ))
}

/// Builds the download attachment name, e.g. `cover_letter_Acme_Corp.txt`.
fn download_file_name(company: &str) -> String {
    format!("cover_letter_{}.txt", company.replace(' ', "_"))
}

// ────────────────────────────────────────────────────────────────────────────
// Ratings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveRatingRequest {
    pub user_id: Uuid,
    pub rating: String,
    pub cover_letter: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub why_want_job: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
}

/// POST /api/v1/ratings
///
/// Records a good/bad rating of a generated letter together with the inputs
/// that produced it.
pub async fn handle_save_rating(
    State(state): State<AppState>,
    Json(req): Json<SaveRatingRequest>,
) -> Result<(StatusCode, Json<RatingRow>), AppError> {
    if req.rating != "good" && req.rating != "bad" {
        return Err(AppError::Validation(
            "rating must be 'good' or 'bad'".to_string(),
        ));
    }

    let row = RatingRow {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        rating: req.rating,
        cover_letter: req.cover_letter,
        resume_text: req.resume_text,
        job_description: req.job_description,
        why_want_job: req.why_want_job,
        company: req.company,
        role: req.role,
        created_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO ratings
            (id, user_id, rating, cover_letter, resume_text, job_description,
             why_want_job, company, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.rating)
    .bind(&row.cover_letter)
    .bind(&row.resume_text)
    .bind(&row.job_description)
    .bind(&row.why_want_job)
    .bind(&row.company)
    .bind(&row.role)
    .bind(row.created_at)
    .execute(&state.db)
    .await?;

    info!("Recorded '{}' rating for user {}", row.rating, row.user_id);
    Ok((StatusCode::CREATED, Json(row)))
}
