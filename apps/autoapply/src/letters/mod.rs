// Cover letter generation.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod generator;
pub mod prompts;
