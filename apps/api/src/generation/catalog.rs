//! Instruction catalog — maps length and tone preferences to the
//! instructional fragments embedded in generation prompts.
//!
//! Unknown labels never fail: `from_label` degrades to the default preset
//! (concise / conversational), and deserialization goes through it so a
//! malformed preference in a request body cannot reject the request.

use serde::{Deserialize, Deserializer, Serialize};

/// Target length of a generated cover letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPreference {
    #[default]
    Concise,
    Standard,
}

impl LengthPreference {
    /// Resolves a free-form label. Unknown labels map to `Concise`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "standard" => LengthPreference::Standard,
            _ => LengthPreference::Concise,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            LengthPreference::Concise => {
                "Keep the cover letter concise and focused, between 200-325 words. \
                 Be direct and impactful."
            }
            LengthPreference::Standard => {
                "Write a standard-length cover letter, between 325-450 words. \
                 Provide more detail while staying focused."
            }
        }
    }
}

impl<'de> Deserialize<'de> for LengthPreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(LengthPreference::from_label(&label))
    }
}

/// Writing tone of a generated cover letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TonePreference {
    #[default]
    Conversational,
    Professional,
    Enthusiastic,
    Confident,
}

impl TonePreference {
    /// Resolves a free-form label. Unknown labels map to `Conversational`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "professional" => TonePreference::Professional,
            "enthusiastic" => TonePreference::Enthusiastic,
            "confident" => TonePreference::Confident,
            _ => TonePreference::Conversational,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            TonePreference::Conversational => {
                "Use a warm, conversational tone that is professional but approachable. \
                 Write as if speaking to a colleague. Avoid overly formal language while \
                 maintaining respect."
            }
            TonePreference::Professional => {
                "Use a formal, traditional tone. Choose sophisticated vocabulary, avoid \
                 contractions, and maintain a serious, business-like demeanor throughout. \
                 This is for corporate, finance, law, or government roles."
            }
            TonePreference::Enthusiastic => {
                "Use an energetic, passionate tone that shows genuine excitement about the \
                 role and company. Express enthusiasm naturally without going overboard. \
                 Perfect for startups, creative roles, or mission-driven organizations."
            }
            TonePreference::Confident => {
                "Use a bold, direct tone that emphasizes your unique value proposition. Be \
                 assertive about your capabilities without arrogance. Focus on what you \
                 bring to the table. Ideal for competitive roles and leadership positions."
            }
        }
    }
}

impl<'de> Deserialize<'de> for TonePreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(TonePreference::from_label(&label))
    }
}

/// Length/tone pair attached to a cover-letter request. Both fields default,
/// so an omitted `preferences` object yields concise + conversational.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenerationPreferences {
    #[serde(default)]
    pub length: LengthPreference,
    #[serde(default)]
    pub tone: TonePreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_labels_resolve() {
        assert_eq!(
            LengthPreference::from_label("concise"),
            LengthPreference::Concise
        );
        assert_eq!(
            LengthPreference::from_label("standard"),
            LengthPreference::Standard
        );
    }

    #[test]
    fn test_unknown_length_falls_back_to_concise() {
        assert_eq!(
            LengthPreference::from_label("novella"),
            LengthPreference::Concise
        );
        assert_eq!(LengthPreference::from_label(""), LengthPreference::Concise);
    }

    #[test]
    fn test_unknown_tone_falls_back_to_conversational() {
        assert_eq!(
            TonePreference::from_label("whimsical"),
            TonePreference::Conversational
        );
    }

    #[test]
    fn test_every_tone_resolves_to_distinct_instruction() {
        let tones = [
            TonePreference::Conversational,
            TonePreference::Professional,
            TonePreference::Enthusiastic,
            TonePreference::Confident,
        ];
        for window in tones.windows(2) {
            assert_ne!(window[0].instruction(), window[1].instruction());
        }
    }

    #[test]
    fn test_length_instructions_carry_word_ranges() {
        assert!(LengthPreference::Concise.instruction().contains("200-325"));
        assert!(LengthPreference::Standard.instruction().contains("325-450"));
    }

    #[test]
    fn test_deserialize_unknown_label_degrades() {
        let prefs: GenerationPreferences =
            serde_json::from_str(r#"{"length": "epic", "tone": "snappy"}"#).unwrap();
        assert_eq!(prefs.length, LengthPreference::Concise);
        assert_eq!(prefs.tone, TonePreference::Conversational);
    }

    #[test]
    fn test_deserialize_missing_fields_use_defaults() {
        let prefs: GenerationPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.length, LengthPreference::Concise);
        assert_eq!(prefs.tone, TonePreference::Conversational);
    }

    #[test]
    fn test_serialize_snake_case_labels() {
        assert_eq!(
            serde_json::to_string(&TonePreference::Enthusiastic).unwrap(),
            "\"enthusiastic\""
        );
        assert_eq!(
            serde_json::to_string(&LengthPreference::Standard).unwrap(),
            "\"standard\""
        );
    }
}
