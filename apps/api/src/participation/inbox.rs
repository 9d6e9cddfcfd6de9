use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::user::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
    pub name: String,
    pub email: String,
}

/// A participant's question to an event's organizer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerMessage {
    pub id: Uuid,
    pub event_id: String,
    pub from: MessageSender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Per-event organizer inboxes. In-memory; cleared on restart.
#[derive(Clone, Default)]
pub struct Inbox {
    messages: Arc<RwLock<HashMap<String, Vec<OrganizerMessage>>>>,
}

impl Inbox {
    pub async fn post(&self, event_id: &str, from: &User, body: &str) -> OrganizerMessage {
        let message = OrganizerMessage {
            id: Uuid::new_v4(),
            event_id: event_id.to_string(),
            from: MessageSender {
                name: from.name.clone(),
                email: from.email.clone(),
            },
            body: body.to_string(),
            sent_at: Utc::now(),
        };

        self.messages
            .write()
            .await
            .entry(event_id.to_string())
            .or_default()
            .push(message.clone());

        message
    }

    /// Messages for one event, oldest first.
    pub async fn for_event(&self, event_id: &str) -> Vec<OrganizerMessage> {
        self.messages
            .read()
            .await
            .get(event_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    fn sender() -> User {
        User {
            name: "Alex Doe".to_string(),
            email: "alex.doe@example.com".to_string(),
            role: Role::Participant,
            year: None,
            roll_no: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_messages_are_kept_per_event_in_order() {
        let inbox = Inbox::default();
        inbox.post("fall-music-fest", &sender(), "Is there parking?").await;
        inbox.post("hackathon-24h", &sender(), "Can I join solo?").await;
        inbox.post("fall-music-fest", &sender(), "Are pets allowed?").await;

        let fest = inbox.for_event("fall-music-fest").await;
        assert_eq!(fest.len(), 2);
        assert_eq!(fest[0].body, "Is there parking?");
        assert_eq!(fest[1].body, "Are pets allowed?");
        assert_eq!(fest[0].from.email, "alex.doe@example.com");
    }

    #[tokio::test]
    async fn test_empty_inbox() {
        assert!(Inbox::default().for_event("resume-workshop").await.is_empty());
    }
}
