// Event catalog: the fixed, in-memory directory of campus events.
// Built once at startup and shared read-only through AppState.

pub mod draft;
pub mod handlers;
pub mod seed;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use crate::catalog::seed::{SeedEvent, SEED_EVENTS};
use crate::models::event::Event;

/// Categories an organizer may pick when drafting an event.
pub const CATEGORIES: &[&str] = &["Tech", "Music", "Art", "Career", "Sports", "Social"];

/// Optional listing filters. Both set means both must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| event.category == c);
        let date_ok = self.date.map_or(true, |d| event.day() == d);
        category_ok && date_ok
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<Event>,
}

impl Catalog {
    /// The directory shipped with the service.
    pub fn seeded() -> Result<Self> {
        Self::from_seed(SEED_EVENTS)
    }

    pub fn from_seed(seed: &[SeedEvent]) -> Result<Self> {
        let events = seed
            .iter()
            .map(|s| {
                let date = parse_event_datetime(s.date)
                    .with_context(|| format!("Seed event '{}' has invalid date '{}'", s.id, s.date))?;
                Ok(Event {
                    id: s.id.to_string(),
                    name: s.name.to_string(),
                    date,
                    location: s.location.to_string(),
                    description: s.description.to_string(),
                    category: s.category.to_string(),
                    image: s.image.to_string(),
                    ai_hint: s.ai_hint.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Distinct categories in the order they first appear.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for event in &self.events {
            if !seen.iter().any(|c| *c == event.category) {
                seen.push(event.category.clone());
            }
        }
        seen
    }

    /// Events matching `filter`, in catalog order.
    pub fn filter(&self, filter: &EventFilter) -> Vec<&Event> {
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }
}

/// Accepts `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM` or a bare `YYYY-MM-DD` (midnight).
pub fn parse_event_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
