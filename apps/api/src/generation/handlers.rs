//! Axum route handlers for the Generation API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generator::{
    generate_cover_letter, generate_interest_statement, generate_question_answer,
    CoverLetterRequest, InterestStatementRequest, QuestionAnswerRequest,
};
use crate::generation::session::SessionArtifact;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct InterestStatementResponse {
    pub statement: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionAnswerResponse {
    pub answer: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshotResponse {
    pub session_id: Uuid,
    pub artifacts: Vec<SessionArtifact>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate/cover-letter
///
/// Generates a tailored cover letter. When the request names a session, the
/// letter is recorded into it for later repetition avoidance.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let cover_letter =
        generate_cover_letter(state.llm.as_ref(), &state.sessions, &request).await?;

    Ok(Json(CoverLetterResponse {
        cover_letter,
        status: "done".to_string(),
    }))
}

/// POST /api/v1/generate/interest-statement
///
/// Generates a 2-3 sentence interest statement for use as cover-letter
/// motivation input. Never recorded into a session.
pub async fn handle_generate_interest_statement(
    State(state): State<AppState>,
    Json(request): Json<InterestStatementRequest>,
) -> Result<Json<InterestStatementResponse>, AppError> {
    let statement = generate_interest_statement(state.llm.as_ref(), &request).await?;

    Ok(Json(InterestStatementResponse {
        statement,
        status: "done".to_string(),
    }))
}

/// POST /api/v1/generate/answer
///
/// Answers a free-text application question, steering away from content
/// already generated in the session.
pub async fn handle_generate_answer(
    State(state): State<AppState>,
    Json(request): Json<QuestionAnswerRequest>,
) -> Result<Json<QuestionAnswerResponse>, AppError> {
    let answer = generate_question_answer(state.llm.as_ref(), &state.sessions, &request).await?;

    Ok(Json(QuestionAnswerResponse {
        answer,
        status: "done".to_string(),
    }))
}

/// POST /api/v1/sessions
///
/// Mints a fresh application session for one company/role effort.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create();
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse { session_id }),
    )
}

/// GET /api/v1/sessions/:id
///
/// Returns the session's artifacts in generation order. Unknown ids yield an
/// empty list rather than an error, matching a freshly cleared session.
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Json<SessionSnapshotResponse> {
    Json(SessionSnapshotResponse {
        session_id,
        artifacts: state.sessions.snapshot(session_id),
    })
}

/// DELETE /api/v1/sessions/:id
///
/// Clears the session's tracked artifacts so the user can start fresh on a
/// new application without repetition steering from the old one.
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> StatusCode {
    state.sessions.clear(session_id);
    StatusCode::NO_CONTENT
}
