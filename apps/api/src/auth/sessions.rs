use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::{RwLock, RwLockReadGuard};
use uuid::Uuid;

use crate::models::user::User;
use crate::participation::Participation;

/// Everything the service remembers about one signed-in browser.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub participation: Participation,
    pub created_at: DateTime<Utc>,
}

/// In-memory session table keyed by bearer token.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Opens a session for `user` and returns its token.
    pub async fn create(&self, user: User) -> Uuid {
        let token = Uuid::new_v4();
        let session = Session {
            user,
            participation: Participation::default(),
            created_at: Utc::now(),
        };
        self.sessions.write().await.insert(token, session);
        token
    }

    pub async fn get(&self, token: Uuid) -> Option<Session> {
        self.sessions.read().await.get(&token).cloned()
    }

    /// Ends the session, discarding all of its state.
    pub async fn remove(&self, token: Uuid) -> Option<Session> {
        self.sessions.write().await.remove(&token)
    }

    /// Read access to the live session. Writers to any session wait until the
    /// guard is dropped, so checks made through it stay true while it is held.
    pub async fn hold(&self, token: Uuid) -> Option<RwLockReadGuard<'_, Session>> {
        RwLockReadGuard::try_map(self.sessions.read().await, |sessions| sessions.get(&token)).ok()
    }

    /// Runs `f` against the live session. `None` if the token is unknown.
    pub async fn update<R>(&self, token: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.sessions.write().await.get_mut(&token).map(f)
    }
}
