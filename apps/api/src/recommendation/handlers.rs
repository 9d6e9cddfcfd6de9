//! Axum route handler for the Recommendation API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::forms::{FieldErrors, Submission, INVALID_FORM};
use crate::models::recommendation::RecommendedEvent;
use crate::recommendation::flow::recommend_events;
use crate::recommendation::form::{RecommendationForm, INTERESTS_REQUIRED};
use crate::state::AppState;

pub const MSG_FAILED: &str = "An unexpected error occurred on our end. Please try again later.";
pub const MSG_EMPTY: &str =
    "No recommendations found for your interests. Try broadening your search terms.";
pub const MSG_SUCCESS: &str = "Success! Here are your tailored event recommendations.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Success,
    /// The model answered, with nothing to recommend.
    Empty,
    Invalid,
    Failed,
}

/// Result of one recommendation submission, whatever happened.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationState {
    pub outcome: RecommendationOutcome,
    pub message: String,
    pub recommendations: Option<Vec<RecommendedEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl RecommendationState {
    fn invalid(errors: FieldErrors) -> Self {
        Self {
            outcome: RecommendationOutcome::Invalid,
            message: INVALID_FORM.to_string(),
            recommendations: None,
            errors: Some(errors),
        }
    }

    fn failed() -> Self {
        Self {
            outcome: RecommendationOutcome::Failed,
            message: MSG_FAILED.to_string(),
            recommendations: None,
            errors: None,
        }
    }

    fn answered(recommendations: Vec<RecommendedEvent>) -> Self {
        if recommendations.is_empty() {
            Self {
                outcome: RecommendationOutcome::Empty,
                message: MSG_EMPTY.to_string(),
                recommendations: Some(Vec::new()),
                errors: None,
            }
        } else {
            Self {
                outcome: RecommendationOutcome::Success,
                message: MSG_SUCCESS.to_string(),
                recommendations: Some(recommendations),
                errors: None,
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self.outcome {
            RecommendationOutcome::Success | RecommendationOutcome::Empty => StatusCode::OK,
            RecommendationOutcome::Invalid => StatusCode::BAD_REQUEST,
            RecommendationOutcome::Failed => StatusCode::BAD_GATEWAY,
        }
    }
}

/// POST /api/v1/recommendations
///
/// Validates the form, then makes exactly one model call. Invalid input never
/// reaches the model; model failures are logged and reported generically.
/// An unreadable body is answered with the same state shape as a bad form.
pub async fn handle_recommend(
    State(state): State<AppState>,
    submission: Result<Submission<RecommendationForm>, AppError>,
) -> (StatusCode, Json<RecommendationState>) {
    let form = match submission {
        Ok(Submission(form)) => form,
        Err(e) => {
            info!("Recommendation body rejected: {e}");
            let mut errors = FieldErrors::new();
            errors.push("interests", INTERESTS_REQUIRED);
            let result = RecommendationState::invalid(errors);
            return (result.status(), Json(result));
        }
    };

    let result = match form.validate() {
        Err(errors) => {
            info!("Recommendation form rejected: {:?}", errors);
            RecommendationState::invalid(errors)
        }
        Ok(input) => match recommend_events(state.model.as_ref(), &input).await {
            Ok(recommendations) => RecommendationState::answered(recommendations),
            Err(e) => {
                error!("Error fetching recommendations: {e}");
                RecommendationState::failed()
            }
        },
    };

    (result.status(), Json(result))
}
