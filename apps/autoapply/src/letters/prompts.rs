// LLM prompt constants for cover letter generation.

/// System prompt for cover letter generation.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional career writer. \
    You write concise, specific cover letters grounded in the candidate profile you are given.";

/// Cover letter prompt template.
/// Replace: {job}, {profile}, {tone}, {output_instruction}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a concise 3-paragraph cover letter tailored to the job description and candidate profile. Use examples from the candidate profile and include why the candidate fits.

Job description: {job}

Candidate profile: {profile}

Tone: {tone}

{output_instruction}"#;
