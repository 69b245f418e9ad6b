// All LLM prompt constants for the generation module.
// Templates carry `{placeholder}` slots filled by the assembler with
// `.replace` — optional blocks collapse to the empty string when absent.

/// System prompt for cover-letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert cover letter writer with 15 years of experience helping candidates land jobs at top companies across all industries. You excel at:

- Identifying key resume highlights that match job requirements
- Writing compelling narratives that showcase candidate strengths without exaggeration
- Adapting tone and style precisely to company culture and industry norms
- Maintaining appropriate length while maximizing impact and readability
- Using specific examples and concrete achievements rather than generic statements
- Crafting authentic, genuine language that sounds human and professional

You understand that cover letters should be concise, focused, and tailored to demonstrate clear value to the employer.";

/// Fallback marker embedded when no job description was supplied.
pub const JOB_DESCRIPTION_FALLBACK: &str =
    "No job description provided. Focus on general fit with the company and role.";

/// Fallback marker embedded when no additional context was supplied.
pub const ADDITIONAL_CONTEXT_FALLBACK: &str = "No additional context provided.";

/// Cover-letter prompt template.
/// Replace: {length_instruction}, {tone_instruction}, {resume},
///          {highlight_block}, {job_description}, {motivation},
///          {additional_context}, {date}, {address}, {company}, {role},
///          {candidate_name}
///
/// The company name appears only in the salutation block and the role title
/// only in the first paragraph slot, so each embeds exactly once.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"<instructions>
<length_requirement>
{length_instruction}
</length_requirement>

<tone_requirement>
{tone_instruction}
</tone_requirement>

<additional_requirements>
- Do not use emojis
- Make the letter specific to this candidate and company
- Use concrete examples from the resume
- Do not include any XML tags, brackets, or meta-instructions in your output
- Output only the final cover letter text
</additional_requirements>
</instructions>

<resume>
{resume}
</resume>{highlight_block}

<job_description>
{job_description}
</job_description>

<candidate_motivation>
{motivation}
</candidate_motivation>

<additional_context>
{additional_context}
</additional_context>

<output_format>
The cover letter must follow this exact structure:

{date}

{address}


Hiring Manager
{company}

Dear Hiring Manager,

[First paragraph: State why you are writing and include the exact title of the position: {role}. If applicable, mention any company connections.]

[Second paragraph: Describe what the candidate offers based on their resume. Provide specific examples of how their qualifications match the job requirements. Use work, classroom, or organizational experiences. Expand on resume details without repeating them verbatim.]

[Third paragraph: Establish synergy between the candidate and the company. Include values, traits, corporate culture, or commitment to diversity that align with the candidate's profile.]

[Final paragraph: Reiterate interest in the position and express interest in an interview. Thank the employer for their time and consideration.]

Sincerely,


{candidate_name}
</output_format>

Generate the complete cover letter now, following the output format exactly and applying all requirements. Replace all bracketed instructions with actual content."#;

/// Emphasis block inserted between the resume and job-description sections
/// when the candidate flagged specific resume items.
/// Replace: {highlight}
pub const COVER_LETTER_HIGHLIGHT_BLOCK: &str = r#"

<resume_highlight>
The candidate specifically wants to EMPHASIZE these experiences/achievements from their resume:

{highlight}

IMPORTANT: Make sure to feature and highlight these specific items in the cover letter when relevant.
</resume_highlight>"#;

/// Interest-statement prompt template. Produces a 2-3 sentence statement
/// later usable as cover-letter motivation input.
/// Replace: {resume}, {company}, {role}, {job_description}
pub const INTEREST_STATEMENT_PROMPT_TEMPLATE: &str = r#"Based on the following information, write a brief 2-3 sentence statement explaining why the candidate wants this job. The statement should be honest, specific, and professional.

<resume>
{resume}
</resume>

<job_details>
Company: {company}
Role: {role}
Job Description: {job_description}
</job_details>

Write a 2-3 sentence statement that:
- Highlights genuine interest based on the candidate's background
- Mentions specific aspects of the role or company that align with their experience
- Sounds authentic and not overly enthusiastic
- Can be refined into professional cover letter language

Output only the statement, no additional text or explanations."#;

/// Fallback for a missing job description inside `<job_details>` blocks.
pub const JOB_DETAILS_FALLBACK: &str = "Not provided";

/// Question-answer prompt opening. The question is embedded here and
/// restated verbatim in the footer — dropping the restatement measurably
/// increases off-topic answers, so both embeddings are load-bearing.
/// Replace: {question}
pub const ANSWER_PROMPT_HEADER: &str = r#"You are helping a job candidate answer an application question. Based on the candidate's background and the job details, provide a professional, authentic answer.

<question>
{question}

CRITICAL: Your answer must DIRECTLY and EXPLICITLY answer this specific question above.
Do not answer a different question or go off-topic.
</question>"#;

/// Optional block carrying the candidate's own notes for this question.
/// Replace: {notes}
pub const ANSWER_NOTES_BLOCK: &str = r#"

<candidate_notes_for_this_question>
The candidate provided these notes as CONTEXT and IDEAS to incorporate into your answer:

{notes}

Use these notes to enrich and add depth to your answer.
However, ensure you are ANSWERING THE QUESTION ABOVE, not just expanding on these notes.
</candidate_notes_for_this_question>"#;

/// Resume section of the answer prompt.
/// Replace: {resume}
pub const ANSWER_RESUME_BLOCK: &str = r#"

<resume>
{resume}
</resume>"#;

/// Emphasis block for answers.
/// Replace: {highlight}
pub const ANSWER_HIGHLIGHT_BLOCK: &str = r#"

<resume_highlight>
The candidate specifically wants to EMPHASIZE these experiences/achievements from their resume:

{highlight}

IMPORTANT: Make sure to feature and highlight these specific items in your answer when relevant to the question.
</resume_highlight>"#;

/// Job details + additional context sections of the answer prompt.
/// Replace: {company}, {role}, {job_description}, {additional_context}
pub const ANSWER_JOB_BLOCK: &str = r#"

<job_details>
Company: {company}
Role: {role}
Job Description: {job_description}
</job_details>

<additional_context>
{additional_context}
</additional_context>"#;

/// Block quoting everything already written for this application, with the
/// instruction to pick different supporting examples.
/// Replace: {previous}
pub const ANSWER_PREVIOUS_RESPONSES_BLOCK: &str = r#"

<previous_responses>
You have already written the following for this application:

{previous}

IMPORTANT: Avoid repeating the same experiences, skills, or examples mentioned above.
Highlight DIFFERENT aspects of the candidate's background.
Choose different stories, projects, or qualities to showcase.
Ensure this answer complements rather than duplicates what's already been written.
</previous_responses>"#;

/// Answer prompt footer — restates the question and fixes the 2-4 sentence
/// answer length.
/// Replace: {question}
pub const ANSWER_PROMPT_FOOTER: &str = r#"

REMINDER: You are answering this question: "{question}"

Write a clear, concise answer (2-4 sentences) that:
- DIRECTLY and EXPLICITLY answers the question above
- Uses specific examples from the candidate's background when relevant
- Incorporates the candidate's notes/context if provided
- Sounds authentic and professional
- Is appropriate for a job application
- Doesn't sound overly eager or generic

Output only the answer, no additional text or explanations."#;
