//! Axum route handlers for the Events API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::{CurrentUser, MaybeUser};
use crate::catalog::draft::EventDraftForm;
use crate::catalog::EventFilter;
use crate::errors::AppError;
use crate::forms::Submission;
use crate::models::event::Event;
use crate::models::notice::Notice;
use crate::models::user::Role;
use crate::participation::ViewerStatus;
use crate::state::AppState;

pub const MSG_NO_MATCHES: &str = "No events match your current filters.";
pub const MSG_EVENT_NOT_FOUND: &str =
    "Event Not Found. Sorry, we couldn't find the event you're looking for.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub category: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

impl EventsQuery {
    fn into_filter(self) -> Result<EventFilter, AppError> {
        let category = self.category.filter(|c| !c.trim().is_empty());
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::Validation(format!("date must be YYYY-MM-DD, got '{raw}'"))
            })?),
        };
        Ok(EventFilter { category, date })
    }
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    pub event: Event,
    pub viewer: ViewerStatus,
}

#[derive(Debug, Serialize)]
pub struct EventCreatedResponse {
    pub event: Event,
    pub notice: Notice,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/events?category=&date=
pub async fn handle_list_events(
    State(state): State<AppState>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<EventListResponse>, AppError> {
    let filter = query.into_filter()?;
    let events: Vec<Event> = state.catalog.filter(&filter).into_iter().cloned().collect();
    let message = events.is_empty().then(|| MSG_NO_MATCHES.to_string());

    Ok(Json(EventListResponse {
        events,
        categories: state.catalog.categories(),
        message,
    }))
}

/// GET /api/v1/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// GET /api/v1/events/:id
///
/// The event plus what the current viewer may do with it.
pub async fn handle_get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    MaybeUser(current): MaybeUser,
) -> Result<Json<EventDetailResponse>, AppError> {
    let event = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(MSG_EVENT_NOT_FOUND.to_string()))?;

    let viewer = match &current {
        Some(c) => ViewerStatus::for_viewer(Some(c.user()), c.session.participation.get(&id)),
        None => ViewerStatus::for_viewer(None, None),
    };

    Ok(Json(EventDetailResponse { event, viewer }))
}

/// POST /api/v1/events
///
/// Validates an organizer's draft. The directory itself is fixed, so the
/// accepted draft is returned to the caller rather than listed.
pub async fn handle_create_event(
    current: CurrentUser,
    Submission(form): Submission<EventDraftForm>,
) -> Result<(StatusCode, Json<EventCreatedResponse>), AppError> {
    if current.user().role != Role::Organizer {
        return Err(AppError::Forbidden(
            "Only organizers can create events.".to_string(),
        ));
    }

    let event = form.validate()?;
    info!(
        "Event draft '{}' ({}) accepted from {}",
        event.name,
        event.id,
        current.user().email
    );

    let notice = Notice::new(
        "Event Created Successfully!",
        format!("Your event \"{}\" has been posted.", event.name),
    );
    Ok((StatusCode::CREATED, Json(EventCreatedResponse { event, notice })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(category: Option<&str>, date: Option<&str>) -> EventsQuery {
        EventsQuery {
            category: category.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_query_values_mean_no_filter() {
        let filter = query(Some(""), Some(" ")).into_filter().unwrap();
        assert_eq!(filter, EventFilter::default());
    }

    #[test]
    fn test_query_parses_date() {
        let filter = query(Some("Tech"), Some("2026-11-05")).into_filter().unwrap();
        assert_eq!(filter.category.as_deref(), Some("Tech"));
        assert_eq!(filter.date, NaiveDate::from_ymd_opt(2026, 11, 5));
    }

    #[test]
    fn test_query_rejects_bad_date() {
        assert!(matches!(
            query(None, Some("Nov 5")).into_filter(),
            Err(AppError::Validation(_))
        ));
    }
}
