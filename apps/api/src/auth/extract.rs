//! Session extractors. Clients authenticate with `Authorization: Bearer <token>`.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::auth::sessions::Session;
use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;

/// A request made with a live session. Rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub token: Uuid,
    pub session: Session,
}

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.session.user
    }
}

/// A request that may or may not carry a live session.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

fn bearer_token(parts: &Parts) -> Option<Uuid> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

async fn resolve(parts: &Parts, state: &AppState) -> Option<CurrentUser> {
    let token = bearer_token(parts)?;
    let session = state.sessions.get(token).await?;
    Some(CurrentUser { token, session })
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        resolve(parts, state).await.ok_or(AppError::Unauthorized)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        Ok(MaybeUser(resolve(parts, state).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_parses_uuid() {
        let token = Uuid::new_v4();
        let parts = parts_with(Some(&format!("Bearer {token}")));
        assert_eq!(bearer_token(&parts), Some(token));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes_and_garbage() {
        assert!(bearer_token(&parts_with(None)).is_none());
        assert!(bearer_token(&parts_with(Some("Basic YWxleDpzZWNyZXQ="))).is_none());
        assert!(bearer_token(&parts_with(Some("Bearer not-a-uuid"))).is_none());
    }
}
