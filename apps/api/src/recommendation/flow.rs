//! Recommendation flow — one prompt, one model call, strict output validation.
//!
//! The model's reply must be a JSON array of `RecommendedEvent`s. Any item with
//! a blank name or description, or a score outside [0, 1], rejects the whole
//! reply. Partial output is never returned.

use tracing::info;

use crate::llm_client::{strip_json_fences, CompletionModel, LlmError};
use crate::models::recommendation::RecommendedEvent;
use crate::recommendation::form::RecommendEventsInput;
use crate::recommendation::prompts::{build_recommend_prompt, RECOMMEND_SYSTEM};

/// Asks the model for recommendations and validates what comes back.
pub async fn recommend_events(
    model: &dyn CompletionModel,
    input: &RecommendEventsInput,
) -> Result<Vec<RecommendedEvent>, LlmError> {
    let prompt = build_recommend_prompt(&input.user_interests, &input.past_events);
    let text = model.complete(&prompt, RECOMMEND_SYSTEM).await?;
    let recommendations = parse_recommendations(&text)?;

    info!(
        "Model returned {} recommendation(s) for {} interest(s)",
        recommendations.len(),
        input.interest_count()
    );
    Ok(recommendations)
}

/// Parses and validates raw model text.
pub fn parse_recommendations(text: &str) -> Result<Vec<RecommendedEvent>, LlmError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }

    let recommendations: Vec<RecommendedEvent> = serde_json::from_str(text)?;

    for (index, rec) in recommendations.iter().enumerate() {
        validate_recommendation(rec)
            .map_err(|reason| LlmError::Malformed(format!("item {index}: {reason}")))?;
    }

    Ok(recommendations)
}

fn validate_recommendation(rec: &RecommendedEvent) -> Result<(), String> {
    if rec.event_name.trim().is_empty() {
        return Err("eventName is empty".to_string());
    }
    if rec.event_description.trim().is_empty() {
        return Err("eventDescription is empty".to_string());
    }
    let score = rec.relevance_score;
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(format!("relevanceScore {score} is outside [0, 1]"));
    }
    Ok(())
}
