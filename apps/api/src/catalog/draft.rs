use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::{parse_event_datetime, CATEGORIES};
use crate::forms::{has_min_chars, is_valid_url, trimmed, FieldErrors};
use crate::models::event::Event;

/// Organizer's new-event form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraftForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl EventDraftForm {
    /// Validates every field and, if all pass, builds the event with a fresh id.
    pub fn validate(&self) -> Result<Event, FieldErrors> {
        let name = trimmed(&self.name);
        let description = trimmed(&self.description);
        let location = trimmed(&self.location);
        let date_raw = trimmed(&self.date);
        let category = trimmed(&self.category);
        let image = trimmed(&self.image);

        let mut errors = FieldErrors::new();

        if !has_min_chars(name, 3) {
            errors.push("name", "Event name must be at least 3 characters.");
        }
        if !has_min_chars(description, 10) {
            errors.push("description", "Description must be at least 10 characters.");
        }
        if !has_min_chars(location, 3) {
            errors.push("location", "Location is required.");
        }

        let date = if date_raw.is_empty() {
            errors.push("date", "A date is required.");
            None
        } else {
            let parsed = parse_event_datetime(date_raw);
            if parsed.is_none() {
                errors.push("date", "Please enter a valid date.");
            }
            parsed
        };

        if !CATEGORIES.contains(&category) {
            errors.push("category", "Please select a category.");
        }
        if !is_valid_url(image) {
            errors.push("image", "Please enter a valid image URL.");
        }

        match date {
            Some(date) if errors.is_empty() => Ok(Event {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                date,
                location: location.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                image: image.to_string(),
                ai_hint: format!("{} event", category.to_lowercase()),
            }),
            _ => Err(errors),
        }
    }
}
