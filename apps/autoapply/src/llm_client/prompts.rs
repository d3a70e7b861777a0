// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs alongside it and pulls cross-cutting pieces from here.

/// Appended to prose-generating prompts so the reply can be used verbatim.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with the requested text only. \
    Do NOT add a preamble, a title, notes to the user, or markdown formatting. \
    Do NOT invent employers, dates, or achievements not present in the profile.";
