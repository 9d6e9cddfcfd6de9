use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A campus event as shown in the directory. Times are campus-local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: NaiveDateTime,
    pub location: String,
    pub description: String,
    pub category: String,
    /// Image URL for the event card.
    pub image: String,
    /// Short keyword hint describing the image.
    pub ai_hint: String,
}

impl Event {
    /// Calendar day the event falls on.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}
