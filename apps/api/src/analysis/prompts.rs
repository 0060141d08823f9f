// All LLM prompt constants for the analysis module.

/// System prompt for the full AI resume review.
pub const REVIEW_SYSTEM: &str = "You are an expert resume reviewer.";

/// Review prompt template. Replace `{resume_text}` and `{job_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"You are a professional technical recruiter.

Analyze the following resume against the given job description.

Respond strictly in this format:

OVERALL ASSESSMENT:
(Short paragraph)

STRENGTHS:
- Bullet points

WEAKNESSES:
- Bullet points

IMPROVEMENT SUGGESTIONS:
- Bullet points

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_text}"#;

/// System prompt for single-bullet rewriting.
pub const BULLET_SYSTEM: &str = "You are a professional resume coach.";

/// Bullet rewrite prompt template. Replace `{bullet_text}` before sending.
pub const BULLET_PROMPT_TEMPLATE: &str = r#"Rewrite the following resume bullet point to be more impactful.
Focus on measurable results, action verbs, and clarity.

Bullet: {bullet_text}"#;
