// Participation: registrations, reminders and organizer messages.
// Registration state lives inside each session and is discarded at logout.

pub mod handlers;
pub mod inbox;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::user::{Role, User};

pub const HINT_LOG_IN: &str = "Please log in as a participant to register for events.";
pub const HINT_ORGANIZER: &str = "Organizers cannot register for events.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registration {
    pub registered_at: DateTime<Utc>,
    pub reminder_set: bool,
}

#[derive(Debug, Error, PartialEq)]
#[error("not registered for event '{0}'")]
pub struct NotRegistered(pub String);

/// One session's registrations, keyed by event id.
#[derive(Debug, Clone, Default)]
pub struct Participation {
    registrations: HashMap<String, Registration>,
}

impl Participation {
    /// Registers for `event_id`. Re-registering keeps the original record.
    pub fn register(&mut self, event_id: &str, now: DateTime<Utc>) -> Registration {
        *self
            .registrations
            .entry(event_id.to_string())
            .or_insert(Registration {
                registered_at: now,
                reminder_set: false,
            })
    }

    /// Drops the registration and, with it, any reminder.
    pub fn unregister(&mut self, event_id: &str) -> Option<Registration> {
        self.registrations.remove(event_id)
    }

    /// Turns the reminder on or off. Turning it on needs a registration;
    /// turning it off without one is a no-op.
    pub fn set_reminder(&mut self, event_id: &str, on: bool) -> Result<(), NotRegistered> {
        match self.registrations.get_mut(event_id) {
            Some(reg) => {
                reg.reminder_set = on;
                Ok(())
            }
            None if !on => Ok(()),
            None => Err(NotRegistered(event_id.to_string())),
        }
    }

    pub fn get(&self, event_id: &str) -> Option<&Registration> {
        self.registrations.get(event_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Registration)> {
        self.registrations.iter().map(|(id, reg)| (id.as_str(), reg))
    }
}

/// What the current viewer may do on an event page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerStatus {
    pub can_register: bool,
    pub registered: bool,
    pub reminder_set: bool,
    pub can_message_organizer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ViewerStatus {
    pub fn for_viewer(user: Option<&User>, registration: Option<&Registration>) -> Self {
        match user.map(|u| u.role) {
            None => Self::blocked(HINT_LOG_IN),
            Some(Role::Organizer) => Self::blocked(HINT_ORGANIZER),
            Some(Role::Participant) => Self {
                can_register: true,
                registered: registration.is_some(),
                reminder_set: registration.is_some_and(|r| r.reminder_set),
                can_message_organizer: registration.is_some(),
                hint: None,
            },
        }
    }

    fn blocked(hint: &str) -> Self {
        Self {
            can_register: false,
            registered: false,
            reminder_set: false,
            can_message_organizer: false,
            hint: Some(hint.to_string()),
        }
    }
}
