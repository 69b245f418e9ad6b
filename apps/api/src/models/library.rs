use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved resume in the user's library.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_name: String,
    pub resume_address: String,
    pub resume_text: String,
    pub date_saved: DateTime<Utc>,
}

/// A generated cover letter kept in the user's history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CoverLetterRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub role: String,
    pub cover_letter: String,
    pub date_created: DateTime<Utc>,
}

/// A good/bad rating of a generated letter, stored together with the inputs
/// that produced it for later model-improvement analysis.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RatingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rating: String,
    pub cover_letter: String,
    pub resume_text: String,
    pub job_description: String,
    pub why_want_job: String,
    pub company: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}
