use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stored per-user profile: identity defaults plus the preference labels
/// pre-selected in the generation form.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub candidate_name: String,
    pub candidate_address: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    pub default_length: String,
    pub default_tone: String,
    pub updated_at: DateTime<Utc>,
}

/// Profile payload returned to clients. Users who never saved a profile get
/// the defaults rather than a 404 — the form renders either way.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub candidate_name: String,
    pub candidate_address: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    pub default_length: String,
    pub default_tone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            candidate_name: String::new(),
            candidate_address: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            portfolio_url: String::new(),
            default_length: "concise".to_string(),
            default_tone: "conversational".to_string(),
        }
    }
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            candidate_name: row.candidate_name,
            candidate_address: row.candidate_address,
            linkedin_url: row.linkedin_url,
            github_url: row.github_url,
            portfolio_url: row.portfolio_url,
            default_length: row.default_length,
            default_tone: row.default_tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_preselects_concise_conversational() {
        let profile = Profile::default();
        assert_eq!(profile.default_length, "concise");
        assert_eq!(profile.default_tone, "conversational");
        assert!(profile.candidate_name.is_empty());
    }
}
