use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::extract::CurrentUser;
use crate::auth::validation::{LoginForm, SignupForm};
use crate::errors::AppError;
use crate::forms::Submission;
use crate::models::notice::Notice;
use crate::models::user::User;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub token: Uuid,
    pub user: User,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: User,
    pub signed_in_at: DateTime<Utc>,
}

/// POST /api/v1/session
pub async fn handle_login(
    State(state): State<AppState>,
    Submission(form): Submission<LoginForm>,
) -> Result<Json<SessionCreatedResponse>, AppError> {
    let user = form.validate()?.into_user();
    let token = state.sessions.create(user.clone()).await;
    info!("Session opened for {} ({})", user.email, user.role);

    let notice = Notice::new("Login Successful!", format!("Welcome back, {}!", user.name));
    Ok(Json(SessionCreatedResponse {
        token,
        user,
        notice,
    }))
}

/// POST /api/v1/signup
///
/// Creates a participant account and signs it in.
pub async fn handle_signup(
    State(state): State<AppState>,
    Submission(form): Submission<SignupForm>,
) -> Result<(StatusCode, Json<SessionCreatedResponse>), AppError> {
    let user = form.validate()?;
    let token = state.sessions.create(user.clone()).await;
    info!("New participant signed up: {}", user.email);

    let notice = Notice::new(
        "Account Created!",
        "You've been successfully signed up and logged in.",
    );
    Ok((
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            token,
            user,
            notice,
        }),
    ))
}

/// GET /api/v1/session
pub async fn handle_current_session(current: CurrentUser) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: current.session.user,
        signed_in_at: current.session.created_at,
    })
}

/// DELETE /api/v1/session
pub async fn handle_logout(
    State(state): State<AppState>,
    current: CurrentUser,
) -> StatusCode {
    state.sessions.remove(current.token).await;
    info!("Session closed for {}", current.user().email);
    StatusCode::NO_CONTENT
}
