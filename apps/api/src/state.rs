use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::generation::session::SessionStore;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Completion backend behind a trait so handlers are testable without
    /// network access.
    pub llm: Arc<dyn CompletionBackend>,
    /// In-memory application sessions. Scoped to this process; never persisted.
    pub sessions: SessionStore,
    pub config: Config,
}
