// Prompt templates for the three summarizer completions.
// Replace `{jd_text}` and `{resume_text}` before sending.

/// First completion: skills present in both resume and JD.
pub const MATCHED_SKILLS_PROMPT: &str = r#"You are an AI assistant.

From the resume below, identify skills or experiences that match with the job description.

**IMPORTANT:** ONLY reply with a valid JSON array of strings.

Job Description:
{jd_text}

Resume:
{resume_text}"#;

/// Second completion: JD skills absent from the resume.
pub const MISSING_SKILLS_PROMPT: &str = r#"You are an AI assistant.

From the job description below, identify important skills that are missing in the resume.

**IMPORTANT:** ONLY reply with a valid JSON array of strings.

Job Description:
{jd_text}

Resume:
{resume_text}"#;

/// Third completion: 0–100 rating plus a short prose summary.
pub const RATING_SUMMARY_PROMPT: &str = r#"You are an AI assistant.

Based on the job description and resume, rate the candidate's fitness on a scale of 0 to 100.

Then provide a short summary paragraph highlighting strengths and areas of improvement.

**IMPORTANT:** ONLY reply with a valid JSON object with keys:
- rating_percent (integer)
- summary (string)

Job Description:
{jd_text}

Resume:
{resume_text}"#;
