//! Generation orchestrator — runs each authoring operation end to end.
//!
//! Flow per operation: validate required fields → assemble prompt → one
//! completion call → record the artifact into the session tracker.
//! Validation failures never reach the network; completion failures surface
//! verbatim with no retry and no partial result, leaving the session
//! untouched so the user can re-trigger.

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::assembler::{
    build_cover_letter_prompt, build_interest_statement_prompt, build_question_answer_prompt,
    CandidateProfile, JobContext,
};
use crate::generation::catalog::GenerationPreferences;
use crate::generation::session::{ArtifactKind, SessionArtifact, SessionStore};
use crate::llm_client::CompletionBackend;

/// Output token budgets per operation. Letters need room for four
/// paragraphs; statements and answers are a few sentences each.
pub const COVER_LETTER_MAX_TOKENS: u32 = 1500;
pub const INTEREST_STATEMENT_MAX_TOKENS: u32 = 300;
pub const QUESTION_ANSWER_MAX_TOKENS: u32 = 400;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for cover-letter generation.
#[derive(Debug, Clone, Deserialize)]
pub struct CoverLetterRequest {
    /// Application session to record the result into. Absent means an
    /// untracked one-shot generation.
    pub session_id: Option<Uuid>,
    pub profile: CandidateProfile,
    pub job: JobContext,
    #[serde(default)]
    pub preferences: GenerationPreferences,
    /// The candidate's motivation, rough notes are fine.
    pub why_want_job: String,
}

/// Request body for interest-statement generation.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestStatementRequest {
    pub profile: CandidateProfile,
    pub job: JobContext,
}

/// Request body for application-question answering.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionAnswerRequest {
    pub session_id: Option<Uuid>,
    pub profile: CandidateProfile,
    pub job: JobContext,
    pub question: String,
    #[serde(default)]
    pub question_notes: Option<String>,
    /// When set, everything already generated in the session is quoted in
    /// the prompt with an instruction to use different examples.
    #[serde(default = "default_avoid_repetition")]
    pub avoid_repetition: bool,
}

fn default_avoid_repetition() -> bool {
    true
}

// ────────────────────────────────────────────────────────────────────────────
// Operations
// ────────────────────────────────────────────────────────────────────────────

/// Generates a tailored cover letter and records it into the session.
pub async fn generate_cover_letter(
    llm: &dyn CompletionBackend,
    sessions: &SessionStore,
    request: &CoverLetterRequest,
) -> Result<String, AppError> {
    validate_identity(&request.profile, &request.job)?;
    require_field(&request.why_want_job, "why_want_job")?;

    let (system, prompt) = build_cover_letter_prompt(
        &request.profile,
        &request.job,
        &request.preferences,
        &request.why_want_job,
        Utc::now().date_naive(),
    );
    debug!("Cover letter prompt assembled ({} chars)", prompt.len());

    info!(
        "Generating cover letter for {} / {}",
        request.job.company, request.job.role
    );
    let letter = llm
        .complete(Some(&system), &prompt, COVER_LETTER_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    if let Some(session_id) = request.session_id {
        sessions.append(
            session_id,
            SessionArtifact {
                kind: ArtifactKind::CoverLetter,
                content: letter.clone(),
                created_at: Utc::now(),
            },
        );
    }

    Ok(letter)
}

/// Generates a brief interest statement. Statements are intermediate drafts
/// destined to become `why_want_job` input, so they are never recorded into
/// the session tracker.
pub async fn generate_interest_statement(
    llm: &dyn CompletionBackend,
    request: &InterestStatementRequest,
) -> Result<String, AppError> {
    validate_identity(&request.profile, &request.job)?;

    let prompt = build_interest_statement_prompt(&request.profile, &request.job);

    info!(
        "Generating interest statement for {} / {}",
        request.job.company, request.job.role
    );
    llm.complete(None, &prompt, INTEREST_STATEMENT_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))
}

/// Generates an answer to an application question, quoting prior session
/// artifacts to steer the model toward different supporting examples, and
/// records the Q/A pair into the session.
pub async fn generate_question_answer(
    llm: &dyn CompletionBackend,
    sessions: &SessionStore,
    request: &QuestionAnswerRequest,
) -> Result<String, AppError> {
    require_field(&request.question, "question")?;
    validate_identity(&request.profile, &request.job)?;

    let prior = match (request.avoid_repetition, request.session_id) {
        (true, Some(session_id)) => sessions.snapshot(session_id),
        _ => Vec::new(),
    };

    let prompt = build_question_answer_prompt(
        &request.question,
        &request.profile,
        &request.job,
        request.question_notes.as_deref(),
        &prior,
    );
    debug!(
        "Answer prompt assembled ({} chars, {} prior artifacts)",
        prompt.len(),
        prior.len()
    );

    info!(
        "Generating answer for {} / {}",
        request.job.company, request.job.role
    );
    let answer = llm
        .complete(None, &prompt, QUESTION_ANSWER_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    if let Some(session_id) = request.session_id {
        sessions.append(
            session_id,
            SessionArtifact {
                kind: ArtifactKind::ApplicationQuestion,
                content: format!("Q: {}\nA: {}", request.question, answer),
                created_at: Utc::now(),
            },
        );
    }

    Ok(answer)
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Checks the identity fields every operation needs. Runs before any
/// network call; a missing field short-circuits the operation.
fn validate_identity(profile: &CandidateProfile, job: &JobContext) -> Result<(), AppError> {
    require_field(&profile.name, "candidate name")?;
    require_field(&profile.address, "candidate address")?;
    require_field(&profile.resume_text, "resume text")?;
    require_field(&job.company, "company name")?;
    require_field(&job.role, "role title")?;
    Ok(())
}

fn require_field(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidPreferences(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
