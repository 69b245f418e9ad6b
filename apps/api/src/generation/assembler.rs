//! Prompt assembler — deterministically serializes a generation request into
//! the exact payload text for each operation.
//!
//! Every builder is a pure, total function of its inputs: missing optional
//! fields degrade to fallback markers and never fail. Field-presence
//! validation lives in the orchestrator, not here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::generation::catalog::GenerationPreferences;
use crate::generation::prompts::{
    ADDITIONAL_CONTEXT_FALLBACK, ANSWER_HIGHLIGHT_BLOCK, ANSWER_JOB_BLOCK, ANSWER_NOTES_BLOCK,
    ANSWER_PREVIOUS_RESPONSES_BLOCK, ANSWER_PROMPT_FOOTER, ANSWER_PROMPT_HEADER,
    ANSWER_RESUME_BLOCK, COVER_LETTER_HIGHLIGHT_BLOCK, COVER_LETTER_PROMPT_TEMPLATE,
    COVER_LETTER_SYSTEM, INTEREST_STATEMENT_PROMPT_TEMPLATE, JOB_DESCRIPTION_FALLBACK,
    JOB_DETAILS_FALLBACK,
};
use crate::generation::session::SessionArtifact;

/// The candidate's identity and resume, supplied fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    /// Multi-line postal address, embedded verbatim in the letter header.
    pub address: String,
    pub resume_text: String,
}

/// The target company/role plus optional supporting text. Absent optional
/// fields are empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobContext {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub additional_context: String,
    /// Resume items the candidate wants featured prominently.
    #[serde(default)]
    pub resume_highlight: String,
}

/// Builds the (system, user) payload pair for cover-letter generation.
///
/// `today` is a parameter rather than read from the clock so the embedded
/// date is a deterministic function of the inputs.
pub fn build_cover_letter_prompt(
    profile: &CandidateProfile,
    job: &JobContext,
    preferences: &GenerationPreferences,
    why_want_job: &str,
    today: NaiveDate,
) -> (String, String) {
    let highlight_block = if job.resume_highlight.trim().is_empty() {
        String::new()
    } else {
        COVER_LETTER_HIGHLIGHT_BLOCK.replace("{highlight}", &job.resume_highlight)
    };

    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{length_instruction}", preferences.length.instruction())
        .replace("{tone_instruction}", preferences.tone.instruction())
        .replace("{date}", &format_letter_date(today))
        .replace("{highlight_block}", &highlight_block)
        .replace(
            "{job_description}",
            or_fallback(&job.job_description, JOB_DESCRIPTION_FALLBACK),
        )
        .replace(
            "{additional_context}",
            or_fallback(&job.additional_context, ADDITIONAL_CONTEXT_FALLBACK),
        )
        .replace("{motivation}", why_want_job)
        .replace("{address}", &profile.address)
        .replace("{company}", &job.company)
        .replace("{role}", &job.role)
        .replace("{candidate_name}", &profile.name)
        .replace("{resume}", &profile.resume_text);

    (COVER_LETTER_SYSTEM.to_string(), prompt)
}

/// Builds the payload for a 2-3 sentence interest statement, usable later as
/// the `why_want_job` input of a cover letter.
pub fn build_interest_statement_prompt(profile: &CandidateProfile, job: &JobContext) -> String {
    INTEREST_STATEMENT_PROMPT_TEMPLATE
        .replace("{company}", &job.company)
        .replace("{role}", &job.role)
        .replace(
            "{job_description}",
            or_fallback(&job.job_description, JOB_DETAILS_FALLBACK),
        )
        .replace("{resume}", &profile.resume_text)
}

/// Builds the payload for an application-question answer.
///
/// The question embeds twice — once in the primary instruction block and
/// once restated in the footer. Non-empty `prior_artifacts` serialize into a
/// previous-responses block instructing the model to pick different
/// supporting examples.
pub fn build_question_answer_prompt(
    question: &str,
    profile: &CandidateProfile,
    job: &JobContext,
    question_notes: Option<&str>,
    prior_artifacts: &[SessionArtifact],
) -> String {
    let mut prompt = ANSWER_PROMPT_HEADER.replace("{question}", question);

    if let Some(notes) = question_notes.filter(|n| !n.trim().is_empty()) {
        prompt.push_str(&ANSWER_NOTES_BLOCK.replace("{notes}", notes));
    }

    prompt.push_str(&ANSWER_RESUME_BLOCK.replace("{resume}", &profile.resume_text));

    if !job.resume_highlight.trim().is_empty() {
        prompt.push_str(&ANSWER_HIGHLIGHT_BLOCK.replace("{highlight}", &job.resume_highlight));
    }

    prompt.push_str(
        &ANSWER_JOB_BLOCK
            .replace("{company}", &job.company)
            .replace("{role}", &job.role)
            .replace(
                "{job_description}",
                or_fallback(&job.job_description, JOB_DETAILS_FALLBACK),
            )
            .replace(
                "{additional_context}",
                or_fallback(&job.additional_context, ADDITIONAL_CONTEXT_FALLBACK),
            ),
    );

    if !prior_artifacts.is_empty() {
        prompt.push_str(
            &ANSWER_PREVIOUS_RESPONSES_BLOCK
                .replace("{previous}", &serialize_artifacts(prior_artifacts)),
        );
    }

    prompt.push_str(&ANSWER_PROMPT_FOOTER.replace("{question}", question));
    prompt
}

/// Formats a date the way it appears at the top of a letter, e.g.
/// "March 07, 2026".
fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Serializes prior artifacts as labeled sections, oldest first.
fn serialize_artifacts(artifacts: &[SessionArtifact]) -> String {
    artifacts
        .iter()
        .map(|a| format!("--- {} ---\n{}\n", a.kind.label(), a.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::session::ArtifactKind;
    use chrono::Utc;

    fn jane() -> CandidateProfile {
        CandidateProfile {
            name: "Jane Smith".to_string(),
            address: "123 Main St\nBoston, MA 02101".to_string(),
            resume_text: "BU CS grad. Built a data pipeline project that reduced \
                          processing time by 60%. Research assistant in NLP."
                .to_string(),
        }
    }

    fn anthropic_job() -> JobContext {
        JobContext {
            company: "Anthropic".to_string(),
            role: "Software Engineer".to_string(),
            job_description: "Build tools that help make AI systems more helpful, \
                              harmless, and honest."
                .to_string(),
            additional_context: String::new(),
            resume_highlight: String::new(),
        }
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_cover_letter_embeds_role_company_resume_date_exactly_once() {
        let profile = jane();
        let job = anthropic_job();
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let (_, prompt) = build_cover_letter_prompt(
            &profile,
            &job,
            &GenerationPreferences::default(),
            "I care about AI safety.",
            today,
        );

        assert_eq!(count(&prompt, "Software Engineer"), 1);
        assert_eq!(count(&prompt, "Anthropic"), 1);
        assert_eq!(count(&prompt, &profile.resume_text), 1);
        assert_eq!(count(&prompt, "March 07, 2026"), 1);
    }

    #[test]
    fn test_cover_letter_address_block_and_introduction_slot() {
        // End-to-end scenario: the introduction slot names the exact role
        // title and the header carries the address verbatim.
        let profile = jane();
        let job = anthropic_job();
        let (_, prompt) = build_cover_letter_prompt(
            &profile,
            &job,
            &GenerationPreferences::default(),
            "I care about AI safety.",
            Utc::now().date_naive(),
        );

        assert!(prompt.contains("123 Main St\nBoston, MA 02101"));
        let intro = prompt.find("[First paragraph:").unwrap();
        let role = prompt.find("Software Engineer").unwrap();
        assert!(role > intro, "role title must sit inside the introduction slot");
    }

    #[test]
    fn test_cover_letter_system_prompt_is_returned() {
        let (system, _) = build_cover_letter_prompt(
            &jane(),
            &anthropic_job(),
            &GenerationPreferences::default(),
            "notes",
            Utc::now().date_naive(),
        );
        assert!(system.contains("expert cover letter writer"));
    }

    #[test]
    fn test_cover_letter_embeds_length_and_tone_instructions() {
        let prefs = GenerationPreferences::default();
        let (_, prompt) = build_cover_letter_prompt(
            &jane(),
            &anthropic_job(),
            &prefs,
            "notes",
            Utc::now().date_naive(),
        );
        assert!(prompt.contains("between 200-325 words"));
        assert!(prompt.contains("conversational tone"));
        assert!(prompt.contains("Do not use emojis"));
        assert!(prompt.contains("Do not include any XML tags, brackets, or meta-instructions"));
    }

    #[test]
    fn test_empty_job_description_uses_fallback_marker() {
        let mut job = anthropic_job();
        job.job_description = String::new();
        let (_, prompt) = build_cover_letter_prompt(
            &jane(),
            &job,
            &GenerationPreferences::default(),
            "notes",
            Utc::now().date_naive(),
        );
        assert!(prompt.contains(JOB_DESCRIPTION_FALLBACK));
        assert!(!prompt.contains("<job_description>\n\n</job_description>"));
    }

    #[test]
    fn test_highlight_block_sits_between_resume_and_job_description() {
        // End-to-end scenario: a resume highlight produces an emphasis
        // directive after the resume block and before the job description.
        let mut job = anthropic_job();
        job.resume_highlight = "data pipeline project".to_string();
        let (_, prompt) = build_cover_letter_prompt(
            &jane(),
            &job,
            &GenerationPreferences::default(),
            "notes",
            Utc::now().date_naive(),
        );

        let resume_end = prompt.find("</resume>").unwrap();
        let highlight = prompt.find("<resume_highlight>").unwrap();
        let jd_start = prompt.find("<job_description>").unwrap();
        assert!(resume_end < highlight);
        assert!(highlight < jd_start);
        assert!(prompt.contains("EMPHASIZE"));
    }

    #[test]
    fn test_no_highlight_means_no_emphasis_block() {
        let (_, prompt) = build_cover_letter_prompt(
            &jane(),
            &anthropic_job(),
            &GenerationPreferences::default(),
            "notes",
            Utc::now().date_naive(),
        );
        assert!(!prompt.contains("<resume_highlight>"));
    }

    #[test]
    fn test_interest_statement_embeds_resume_and_job_fields() {
        let profile = jane();
        let job = anthropic_job();
        let prompt = build_interest_statement_prompt(&profile, &job);
        assert!(prompt.contains("2-3 sentence"));
        assert!(prompt.contains(&profile.resume_text));
        assert!(prompt.contains("Company: Anthropic"));
        assert!(prompt.contains("Role: Software Engineer"));
    }

    #[test]
    fn test_interest_statement_missing_description_says_not_provided() {
        let mut job = anthropic_job();
        job.job_description = "   ".to_string();
        let prompt = build_interest_statement_prompt(&jane(), &job);
        assert!(prompt.contains("Job Description: Not provided"));
    }

    #[test]
    fn test_question_appears_at_least_twice() {
        let question = "Why do you want to work here?";
        let prompt = build_question_answer_prompt(question, &jane(), &anthropic_job(), None, &[]);
        assert!(count(&prompt, question) >= 2);
        assert!(prompt.contains("2-4 sentences"));
    }

    #[test]
    fn test_prior_artifacts_quoted_with_avoid_repetition_instruction() {
        // End-to-end scenario: a prior cover letter shows up in the answer
        // prompt together with the instruction to choose different examples.
        let artifact = SessionArtifact {
            kind: ArtifactKind::CoverLetter,
            content: "Dear Hiring Manager, my data pipeline work...".to_string(),
            created_at: Utc::now(),
        };
        let prompt = build_question_answer_prompt(
            "Why do you want to work here?",
            &jane(),
            &anthropic_job(),
            None,
            &[artifact.clone()],
        );

        assert!(prompt.contains("You have already written the following"));
        assert!(prompt.contains("--- Cover Letter ---"));
        assert!(prompt.contains(&artifact.content));
        assert!(prompt.contains("Avoid repeating the same experiences"));
    }

    #[test]
    fn test_no_prior_artifacts_means_no_previous_responses_block() {
        let prompt =
            build_question_answer_prompt("Why us?", &jane(), &anthropic_job(), None, &[]);
        assert!(!prompt.contains("<previous_responses>"));
    }

    #[test]
    fn test_question_notes_embed_when_present() {
        let prompt = build_question_answer_prompt(
            "Why us?",
            &jane(),
            &anthropic_job(),
            Some("I led a similar project at my previous company"),
            &[],
        );
        assert!(prompt.contains("<candidate_notes_for_this_question>"));
        assert!(prompt.contains("I led a similar project"));
    }

    #[test]
    fn test_blank_question_notes_are_skipped() {
        let prompt =
            build_question_answer_prompt("Why us?", &jane(), &anthropic_job(), Some("  "), &[]);
        assert!(!prompt.contains("<candidate_notes_for_this_question>"));
    }

    #[test]
    fn test_answer_prompt_orders_artifacts_oldest_first() {
        let first = SessionArtifact {
            kind: ArtifactKind::CoverLetter,
            content: "letter text".to_string(),
            created_at: Utc::now(),
        };
        let second = SessionArtifact {
            kind: ArtifactKind::ApplicationQuestion,
            content: "Q: Why?\nA: Because.".to_string(),
            created_at: Utc::now(),
        };
        let prompt = build_question_answer_prompt(
            "What is your greatest strength?",
            &jane(),
            &anthropic_job(),
            None,
            &[first.clone(), second.clone()],
        );
        let first_at = prompt.find(&first.content).unwrap();
        let second_at = prompt.find(&second.content).unwrap();
        assert!(first_at < second_at);
        assert!(prompt.contains("--- Application Question ---"));
    }

    #[test]
    fn test_letter_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        assert_eq!(format_letter_date(date), "July 04, 2026");
    }
}
