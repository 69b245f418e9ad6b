//! Application-session tracking — the ordered log of artifacts generated for
//! one company/role application, used to keep later generations from
//! repeating earlier content.
//!
//! The tracker holds no dedup logic. Repetition avoidance happens entirely
//! in the prompt assembler, which serializes a snapshot into the payload.
//! Trackers live in memory only and are never persisted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of artifact was generated. Interest statements are intermediate
/// drafts and are never recorded, so they have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    CoverLetter,
    ApplicationQuestion,
}

impl ArtifactKind {
    /// Human-readable section label used when quoting prior artifacts in a
    /// prompt.
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::CoverLetter => "Cover Letter",
            ArtifactKind::ApplicationQuestion => "Application Question",
        }
    }
}

/// One generated piece of text kept for cross-reference within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionArtifact {
    pub kind: ArtifactKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only, insertion-ordered log of artifacts for one application
/// session.
#[derive(Debug, Default)]
pub struct SessionTracker {
    artifacts: Vec<SessionArtifact>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, artifact: SessionArtifact) {
        self.artifacts.push(artifact);
    }

    /// Read-only view of the log, oldest first.
    pub fn snapshot(&self) -> &[SessionArtifact] {
        &self.artifacts
    }

    pub fn clear(&mut self) {
        self.artifacts.clear();
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Lock-guarded map of session id → tracker, shared across handlers.
///
/// Generation operations may run concurrently; the mutex serializes tracker
/// access so append ordering is preserved.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionTracker>>>,
}

impl SessionStore {
    /// Mints a fresh, empty session and returns its id.
    pub fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.lock().insert(id, SessionTracker::new());
        id
    }

    /// Appends to the session's log, creating the session if the id is new.
    pub fn append(&self, id: Uuid, artifact: SessionArtifact) {
        self.lock().entry(id).or_default().append(artifact);
    }

    /// Cloned snapshot of a session's artifacts. Unknown ids yield an empty
    /// sequence.
    pub fn snapshot(&self, id: Uuid) -> Vec<SessionArtifact> {
        self.lock()
            .get(&id)
            .map(|t| t.snapshot().to_vec())
            .unwrap_or_default()
    }

    /// Empties the session's log. A cleared session keeps existing and can
    /// be appended to again.
    pub fn clear(&self, id: Uuid) {
        if let Some(tracker) = self.lock().get_mut(&id) {
            tracker.clear();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, SessionTracker>> {
        self.inner.lock().expect("session store lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(kind: ArtifactKind, content: &str) -> SessionArtifact {
        SessionArtifact {
            kind,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_then_snapshot_grows_by_one_and_ends_with_appended() {
        let mut tracker = SessionTracker::new();
        tracker.append(artifact(ArtifactKind::CoverLetter, "first"));
        let before = tracker.len();

        tracker.append(artifact(ArtifactKind::ApplicationQuestion, "second"));
        let snapshot = tracker.snapshot();

        assert_eq!(snapshot.len(), before + 1);
        assert_eq!(snapshot.last().unwrap().content, "second");
        assert_eq!(
            snapshot.last().unwrap().kind,
            ArtifactKind::ApplicationQuestion
        );
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut tracker = SessionTracker::new();
        for content in ["a", "b", "c"] {
            tracker.append(artifact(ArtifactKind::ApplicationQuestion, content));
        }
        let contents: Vec<&str> = tracker
            .snapshot()
            .iter()
            .map(|a| a.content.as_str())
            .collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_clear_then_snapshot_is_empty() {
        let mut tracker = SessionTracker::new();
        tracker.append(artifact(ArtifactKind::CoverLetter, "letter"));
        tracker.clear();
        assert!(tracker.snapshot().is_empty());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_store_create_yields_empty_session() {
        let store = SessionStore::default();
        let id = store.create();
        assert!(store.snapshot(id).is_empty());
    }

    #[test]
    fn test_store_append_and_snapshot_roundtrip() {
        let store = SessionStore::default();
        let id = store.create();
        store.append(id, artifact(ArtifactKind::CoverLetter, "letter"));
        let snapshot = store.snapshot(id);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].content, "letter");
    }

    #[test]
    fn test_store_unknown_session_snapshots_empty() {
        let store = SessionStore::default();
        assert!(store.snapshot(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn test_store_clear_empties_but_keeps_session_usable() {
        let store = SessionStore::default();
        let id = store.create();
        store.append(id, artifact(ArtifactKind::CoverLetter, "letter"));
        store.clear(id);
        assert!(store.snapshot(id).is_empty());

        store.append(id, artifact(ArtifactKind::ApplicationQuestion, "answer"));
        assert_eq!(store.snapshot(id).len(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create();
        let b = store.create();
        store.append(a, artifact(ArtifactKind::CoverLetter, "for a"));
        assert!(store.snapshot(b).is_empty());
        assert_eq!(store.snapshot(a).len(), 1);
    }

    #[test]
    fn test_artifact_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ArtifactKind::CoverLetter).unwrap(),
            "\"cover_letter\""
        );
        assert_eq!(
            serde_json::to_string(&ArtifactKind::ApplicationQuestion).unwrap(),
            "\"application_question\""
        );
    }
}
