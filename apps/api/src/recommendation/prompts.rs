// LLM prompt constants for the recommendation flow.

/// System prompt for recommendations — enforces a bare JSON array.
pub const RECOMMEND_SYSTEM: &str = "You are an event recommendation assistant for a university campus. \
    You MUST respond with valid JSON only — a JSON array of event objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Recommendation prompt template.
/// Replace: {user_interests}, {past_events}
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"Recommend campus events for a student based on what they are interested in and what they have attended before.

User interests (comma-separated): {user_interests}
Past events attended (comma-separated, may be empty): {past_events}

Return a JSON ARRAY with this EXACT item shape (no extra fields):
[
  {
    "eventName": "Intro to Generative Music Workshop",
    "eventDescription": "A hands-on session pairing machine learning models with live instruments.",
    "relevanceScore": 0.87
  }
]

RULES:
1. Every item MUST have a non-empty "eventName" and a one or two sentence "eventDescription"
2. "relevanceScore" is a number between 0 and 1 inclusive — 1 means a perfect match for the stated interests
3. Consider a wide range of possible events, not only ones named in the input
4. Scores must be reasonable given the interests and past events; do not give every item the same score
5. Order the array from most to least relevant
6. If nothing fits, return an empty array: []"#;

/// Fills the template. Inputs are embedded verbatim.
pub fn build_recommend_prompt(user_interests: &str, past_events: &str) -> String {
    RECOMMEND_PROMPT_TEMPLATE
        .replace("{user_interests}", user_interests)
        .replace("{past_events}", past_events)
}
