// Tailoring pipeline: validate inputs, interpolate the prompt template,
// call the LLM once, hand the structured result back.
// All LLM calls go through llm_client — no direct API calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod sample;
pub mod validation;
