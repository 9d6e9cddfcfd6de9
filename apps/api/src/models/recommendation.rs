use serde::{Deserialize, Serialize};

/// One model-suggested event. Scores are validated into [0, 1] before
/// a value of this type leaves the recommendation module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedEvent {
    pub event_name: String,
    pub event_description: String,
    pub relevance_score: f64,
}
