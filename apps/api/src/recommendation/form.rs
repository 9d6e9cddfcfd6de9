use serde::Deserialize;

use crate::forms::{text_value, FieldErrors, TextField};

pub const INTERESTS_REQUIRED: &str = "Please enter at least one interest.";
pub const INTERESTS_NOT_TEXT: &str = "Interests must be text, e.g. AI, Music.";
pub const PAST_EVENTS_NOT_TEXT: &str = "Past events must be text.";

/// Raw recommendation form as submitted. Both fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationForm {
    pub interests: Option<TextField>,
    pub past_events: Option<TextField>,
}

/// Validated input to the recommendation flow.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendEventsInput {
    pub user_interests: String,
    /// Empty when the user gave no past events.
    pub past_events: String,
}

impl RecommendEventsInput {
    /// Individual interests, for logging.
    pub fn interest_count(&self) -> usize {
        self.user_interests
            .split(',')
            .filter(|i| !i.trim().is_empty())
            .count()
    }
}

impl RecommendationForm {
    pub fn validate(&self) -> Result<RecommendEventsInput, FieldErrors> {
        let interests = text_value(&self.interests);
        let past_events = text_value(&self.past_events);

        let mut errors = FieldErrors::new();
        match interests {
            None => errors.push("interests", INTERESTS_NOT_TEXT),
            Some("") => errors.push("interests", INTERESTS_REQUIRED),
            Some(_) => {}
        }
        if past_events.is_none() {
            errors.push("pastEvents", PAST_EVENTS_NOT_TEXT);
        }

        match (interests, past_events) {
            (Some(interests), Some(past_events)) if errors.is_empty() => Ok(RecommendEventsInput {
                user_interests: interests.to_string(),
                past_events: past_events.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(interests: Option<&str>, past_events: Option<&str>) -> RecommendationForm {
        RecommendationForm {
            interests: interests.map(TextField::from),
            past_events: past_events.map(TextField::from),
        }
    }

    #[test]
    fn test_interests_without_past_events_is_valid() {
        for interests in ["AI", "AI, Music", "  Startups  ", "x"] {
            let input = form(Some(interests), None).validate().unwrap();
            assert_eq!(input.user_interests, interests.trim());
            assert_eq!(input.past_events, "");
        }
    }

    #[test]
    fn test_empty_interests_fail_on_the_interests_field() {
        for interests in [None, Some(""), Some("   ")] {
            let errors = form(interests, Some("Tech Summit 2023")).validate().unwrap_err();
            assert_eq!(errors.get("interests").unwrap(), [INTERESTS_REQUIRED.to_string()]);
            assert!(errors.get("pastEvents").is_none());
        }
    }

    #[test]
    fn test_past_events_are_trimmed() {
        let input = form(Some("Music"), Some("  Fall Music Fest \n")).validate().unwrap();
        assert_eq!(input.past_events, "Fall Music Fest");
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let parsed: RecommendationForm =
            serde_json::from_str(r#"{"interests": "AI", "pastEvents": "Hackathon"}"#).unwrap();
        assert_eq!(parsed.past_events, Some(TextField::from("Hackathon")));
    }

    #[test]
    fn test_non_text_values_fail_on_their_own_field() {
        let parsed: RecommendationForm =
            serde_json::from_str(r#"{"interests": 42, "pastEvents": "Hackathon"}"#).unwrap();
        let errors = parsed.validate().unwrap_err();
        assert_eq!(errors.get("interests").unwrap(), [INTERESTS_NOT_TEXT.to_string()]);
        assert!(errors.get("pastEvents").is_none());

        let parsed: RecommendationForm =
            serde_json::from_str(r#"{"interests": "AI", "pastEvents": ["Hackathon"]}"#).unwrap();
        let errors = parsed.validate().unwrap_err();
        assert_eq!(errors.get("pastEvents").unwrap(), [PAST_EVENTS_NOT_TEXT.to_string()]);
        assert!(errors.get("interests").is_none());
    }

    #[test]
    fn test_null_interests_read_as_missing() {
        let parsed: RecommendationForm = serde_json::from_str(r#"{"interests": null}"#).unwrap();
        assert_eq!(
            parsed.validate().unwrap_err().get("interests").unwrap(),
            [INTERESTS_REQUIRED.to_string()]
        );
    }

    #[test]
    fn test_interest_count_ignores_blank_entries() {
        let input = form(Some("AI, , Music,"), None).validate().unwrap();
        assert_eq!(input.interest_count(), 2);
    }
}
