// Cross-cutting prompt fragments. Feature modules that need LLM calls keep
// their own prompts.rs alongside their handlers; this file holds only the
// pieces shared across them.

/// System prompt fragment that enforces JSON-only output. Appended to every
/// system prompt whose reply is deserialized with `call_json`.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
