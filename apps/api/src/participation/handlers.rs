use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::CurrentUser;
use crate::errors::AppError;
use crate::forms::{trimmed, FieldErrors, Submission};
use crate::models::event::Event;
use crate::models::notice::Notice;
use crate::models::user::Role;
use crate::participation::inbox::OrganizerMessage;
use crate::participation::{Participation, ViewerStatus, HINT_ORGANIZER};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParticipationResponse {
    pub viewer: ViewerStatus,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationView {
    pub event: Event,
    pub registered_at: DateTime<Utc>,
    pub reminder_set: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageForm {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageSentResponse {
    pub message: OrganizerMessage,
    pub notice: Notice,
}

fn find_event(state: &AppState, id: &str) -> Result<Event, AppError> {
    state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))
}

fn require_participant(current: &CurrentUser) -> Result<(), AppError> {
    if current.user().is_participant() {
        Ok(())
    } else {
        Err(AppError::Forbidden(HINT_ORGANIZER.to_string()))
    }
}

/// Applies `f` to the caller's participation, then reports the resulting viewer status.
async fn update_participation<R>(
    state: &AppState,
    current: &CurrentUser,
    event_id: &str,
    f: impl FnOnce(&mut Participation) -> R,
) -> Result<(R, ViewerStatus), AppError> {
    state
        .sessions
        .update(current.token, |session| {
            let out = f(&mut session.participation);
            let viewer = ViewerStatus::for_viewer(
                Some(&session.user),
                session.participation.get(event_id),
            );
            (out, viewer)
        })
        .await
        .ok_or(AppError::Unauthorized)
}

/// PUT /api/v1/events/:id/registration
pub async fn handle_register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
) -> Result<Json<ParticipationResponse>, AppError> {
    let event = find_event(&state, &id)?;
    require_participant(&current)?;

    let (_, viewer) = update_participation(&state, &current, &id, |p| {
        p.register(&id, Utc::now())
    })
    .await?;
    info!("{} registered for '{}'", current.user().email, event.name);

    Ok(Json(ParticipationResponse {
        viewer,
        notice: Notice::new(
            "Successfully Registered!",
            format!("You are now registered for {}.", event.name),
        ),
    }))
}

/// DELETE /api/v1/events/:id/registration
///
/// Also removes the reminder for the event.
pub async fn handle_unregister(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
) -> Result<Json<ParticipationResponse>, AppError> {
    let event = find_event(&state, &id)?;
    require_participant(&current)?;

    let (removed, viewer) = update_participation(&state, &current, &id, |p| p.unregister(&id)).await?;
    if removed.is_some() {
        info!("{} unregistered from '{}'", current.user().email, event.name);
    }

    Ok(Json(ParticipationResponse {
        viewer,
        notice: Notice::destructive(
            "Unregistered",
            format!("You are no longer registered for {}.", event.name),
        ),
    }))
}

/// PUT /api/v1/events/:id/reminder
pub async fn handle_set_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
) -> Result<Json<ParticipationResponse>, AppError> {
    let event = find_event(&state, &id)?;
    require_participant(&current)?;

    let (result, viewer) =
        update_participation(&state, &current, &id, |p| p.set_reminder(&id, true)).await?;
    result.map_err(|_| {
        AppError::Conflict(format!("Register for {} before setting a reminder.", event.name))
    })?;

    Ok(Json(ParticipationResponse {
        viewer,
        notice: Notice::new(
            "Reminder Set!",
            format!("We'll notify you before {} starts.", event.name),
        ),
    }))
}

/// DELETE /api/v1/events/:id/reminder
pub async fn handle_unset_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
) -> Result<Json<ParticipationResponse>, AppError> {
    let event = find_event(&state, &id)?;
    require_participant(&current)?;

    // Clearing a reminder that was never set is a no-op.
    let (_, viewer) =
        update_participation(&state, &current, &id, |p| p.set_reminder(&id, false)).await?;

    Ok(Json(ParticipationResponse {
        viewer,
        notice: Notice::new(
            "Reminder Removed",
            format!("Your reminder for {} has been removed.", event.name),
        ),
    }))
}

/// POST /api/v1/events/:id/messages
///
/// Sends a question to the event's organizer. Only registered participants may ask.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
    Submission(form): Submission<MessageForm>,
) -> Result<Json<MessageSentResponse>, AppError> {
    let event = find_event(&state, &id)?;
    require_participant(&current)?;

    let body = trimmed(&form.message);
    if body.is_empty() {
        let mut errors = FieldErrors::new();
        errors.push("message", "Please enter a message.");
        return Err(errors.into());
    }

    // The live session stays read-locked until the message is stored, so an
    // unregister cannot slip in between the check and the post.
    let session = state
        .sessions
        .hold(current.token)
        .await
        .ok_or(AppError::Unauthorized)?;
    if session.participation.get(&id).is_none() {
        return Err(AppError::Conflict(format!(
            "Register for {} before messaging the organizer.",
            event.name
        )));
    }

    let message = state.inbox.post(&id, &session.user, body).await;
    drop(session);
    info!(
        "Message about '{}' from {} sent to organizer",
        event.name,
        current.user().email
    );

    Ok(Json(MessageSentResponse {
        message,
        notice: Notice::new(
            "Message Sent!",
            format!(
                "Your query about \"{}\" has been sent to the organizer.",
                event.name
            ),
        ),
    }))
}

/// GET /api/v1/events/:id/messages
///
/// Organizer view of the questions asked about an event.
pub async fn handle_list_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
    current: CurrentUser,
) -> Result<Json<Vec<OrganizerMessage>>, AppError> {
    find_event(&state, &id)?;
    if current.user().role != Role::Organizer {
        return Err(AppError::Forbidden(
            "Only organizers can read event messages.".to_string(),
        ));
    }
    Ok(Json(state.inbox.for_event(&id).await))
}

/// GET /api/v1/me/registrations
///
/// The caller's registrations, soonest event first.
pub async fn handle_my_registrations(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Json<Vec<RegistrationView>> {
    let mut views: Vec<RegistrationView> = current
        .session
        .participation
        .iter()
        .filter_map(|(event_id, reg)| {
            state.catalog.get(event_id).map(|event| RegistrationView {
                event: event.clone(),
                registered_at: reg.registered_at,
                reminder_set: reg.reminder_set,
            })
        })
        .collect();
    views.sort_by(|a, b| a.event.date.cmp(&b.event.date));
    Json(views)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::catalog::Catalog;
    use crate::llm_client::{CompletionModel, LlmError};
    use crate::models::user::User;

    const FEST: &str = "fall-music-fest";

    struct UnusedModel;

    #[async_trait]
    impl CompletionModel for UnusedModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn state() -> AppState {
        AppState::new(Catalog::seeded().unwrap(), Arc::new(UnusedModel))
    }

    async fn registered_participant(state: &AppState) -> Uuid {
        let token = state
            .sessions
            .create(User {
                name: "Alex Doe".to_string(),
                email: "alex.doe@example.com".to_string(),
                role: Role::Participant,
                year: None,
                roll_no: None,
                phone: None,
            })
            .await;
        state
            .sessions
            .update(token, |s| s.participation.register(FEST, Utc::now()))
            .await;
        token
    }

    /// What the extractor would hand a handler: a copy of the session as it was.
    async fn current(state: &AppState, token: Uuid) -> CurrentUser {
        CurrentUser {
            token,
            session: state.sessions.get(token).await.unwrap(),
        }
    }

    fn question(text: &str) -> Submission<MessageForm> {
        Submission(MessageForm {
            message: Some(text.to_string()),
        })
    }

    #[tokio::test]
    async fn test_message_uses_live_registration_not_request_copy() {
        let state = state();
        let token = registered_participant(&state).await;
        let earlier = current(&state, token).await;
        assert!(earlier.session.participation.get(FEST).is_some());

        handle_unregister(State(state.clone()), Path(FEST.to_string()), earlier.clone())
            .await
            .unwrap();

        let result = handle_send_message(
            State(state.clone()),
            Path(FEST.to_string()),
            earlier,
            question("Is there parking?"),
        )
        .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(state.inbox.for_event(FEST).await.is_empty());
    }

    #[tokio::test]
    async fn test_message_stored_for_registered_participant() {
        let state = state();
        let token = registered_participant(&state).await;
        let caller = current(&state, token).await;

        let Json(sent) = handle_send_message(
            State(state.clone()),
            Path(FEST.to_string()),
            caller,
            question("  Is there parking?  "),
        )
        .await
        .unwrap();

        assert_eq!(sent.message.body, "Is there parking?");
        assert_eq!(state.inbox.for_event(FEST).await, vec![sent.message]);
    }

    #[tokio::test]
    async fn test_message_after_logout_is_unauthorized() {
        let state = state();
        let token = registered_participant(&state).await;
        let caller = current(&state, token).await;
        state.sessions.remove(token).await;

        let result = handle_send_message(
            State(state.clone()),
            Path(FEST.to_string()),
            caller,
            question("Still on?"),
        )
        .await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
