pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::extract::handlers as extract_handlers;
use crate::generation::handlers as generation_handlers;
use crate::library::handlers as library_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/generate/cover-letter",
            post(generation_handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/generate/interest-statement",
            post(generation_handlers::handle_generate_interest_statement),
        )
        .route(
            "/api/v1/generate/answer",
            post(generation_handlers::handle_generate_answer),
        )
        // Application sessions
        .route(
            "/api/v1/sessions",
            post(generation_handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(generation_handlers::handle_get_session)
                .delete(generation_handlers::handle_clear_session),
        )
        // Resume upload extraction
        .route(
            "/api/v1/resumes/extract",
            post(extract_handlers::handle_extract_resume),
        )
        // Library API
        .route(
            "/api/v1/profile",
            get(library_handlers::handle_get_profile).put(library_handlers::handle_put_profile),
        )
        .route(
            "/api/v1/resumes",
            get(library_handlers::handle_list_resumes).post(library_handlers::handle_save_resume),
        )
        .route(
            "/api/v1/resumes/latest",
            get(library_handlers::handle_latest_resume),
        )
        .route(
            "/api/v1/cover-letters",
            get(library_handlers::handle_list_cover_letters)
                .post(library_handlers::handle_save_cover_letter),
        )
        .route(
            "/api/v1/cover-letters/:id",
            delete(library_handlers::handle_delete_cover_letter),
        )
        .route(
            "/api/v1/cover-letters/:id/download",
            get(library_handlers::handle_download_cover_letter),
        )
        .route("/api/v1/ratings", post(library_handlers::handle_save_rating))
        .with_state(state)
}
