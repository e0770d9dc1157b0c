// Shared prompt constants. Each flow that calls the model defines its own
// prompts.rs alongside it; this file holds cross-cutting fragments.

/// System prompt enforcing JSON-only output. Both flows return machine-read
/// JSON, so this is the system prompt for every call the advisor makes.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
