//! Shared form-validation helpers.
//!
//! Every submission handler validates its payload into a `FieldErrors` map
//! before touching state. Messages are user-facing and keyed by the form
//! field name the client sent (camelCase).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use regex::Regex;
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Serialize,
};

use crate::errors::AppError;

/// Summary message attached to every rejected form submission.
pub const INVALID_FORM: &str = "Invalid form data. Please check your inputs.";

/// Body extractor accepting either a JSON document or a urlencoded form post.
///
/// Any body that is not urlencoded is read as JSON, with or without a
/// Content-Type. An empty body reads as `{}`. Unreadable bodies reject with
/// `AppError::Validation` so clients always get the JSON error envelope.
#[derive(Debug, Clone)]
pub struct Submission<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let raw = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        let body: &[u8] = if raw.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &raw
        };

        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| AppError::Validation(format!("Request body is not valid JSON: {e}")))
    }
}

/// A submitted value that ought to be text. JSON clients can send anything;
/// non-text values are kept as `NotText` so validation can report them on
/// the field instead of rejecting the whole body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Text(String),
    NotText(IgnoredAny),
}

impl From<&str> for TextField {
    fn from(value: &str) -> Self {
        TextField::Text(value.to_string())
    }
}

/// Trimmed text of an optional field; absent reads as `""`, non-text as `None`.
pub fn text_value(field: &Option<TextField>) -> Option<&str> {
    match field {
        None => Some(""),
        Some(TextField::Text(s)) => Some(s.trim()),
        Some(TextField::NotText(_)) => None,
    }
}

/// Per-field validation messages, serialized as `{ "field": ["msg", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl From<FieldErrors> for AppError {
    fn from(fields: FieldErrors) -> Self {
        AppError::InvalidFields {
            message: INVALID_FORM.to_string(),
            fields,
        }
    }
}

/// Length check in characters, not bytes.
pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9._%+\-']+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
                .expect("email pattern is valid")
        })
        .is_match(value)
}

/// Campus roll numbers, e.g. `23R01A05A1`.
pub fn is_valid_roll_no(value: &str) -> bool {
    static ROLL_NO: OnceLock<Regex> = OnceLock::new();
    ROLL_NO
        .get_or_init(|| {
            Regex::new(r"^[0-9]{2}R[0-9A-Z][0-9][A-Z0-9]{5}$").expect("roll number pattern is valid")
        })
        .is_match(value)
}

/// Absolute URL with a host (`https://...`, `http://...`).
pub fn is_valid_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

/// Treats `None` and whitespace-only input alike.
pub fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_group_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.push("password", "too short");
        errors.push("email", "invalid");
        errors.push("password", "missing digit");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": ["invalid"],
                "password": ["too short", "missing digit"]
            })
        );
    }

    #[test]
    fn test_field_errors_convert_to_invalid_fields() {
        let mut errors = FieldErrors::new();
        errors.push("name", "required");
        match AppError::from(errors) {
            AppError::InvalidFields { message, fields } => {
                assert_eq!(message, INVALID_FORM);
                assert_eq!(fields.get("name").unwrap(), ["required".to_string()]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_min_chars_counts_characters() {
        assert!(has_min_chars("Zoë", 3));
        assert!(!has_min_chars("Zo", 3));
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(is_valid_email("alex.doe@example.com"));
        assert!(is_valid_email("first+tag@campus.edu.in"));
    }

    #[test]
    fn test_email_rejects_garbage() {
        assert!(!is_valid_email("alex"));
        assert!(!is_valid_email("alex@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alex@example"));
        assert!(!is_valid_email("alex doe@example.com"));
    }

    #[test]
    fn test_roll_no_pattern() {
        assert!(is_valid_roll_no("23R01A05A1"));
        assert!(is_valid_roll_no("21R11A0512"));
        assert!(!is_valid_roll_no("23r01a05a1"));
        assert!(!is_valid_roll_no("23R01A05A"));
        assert!(!is_valid_roll_no("2XR01A05A1"));
    }

    #[test]
    fn test_url_requires_absolute_with_host() {
        assert!(is_valid_url("https://placehold.co/600x400.png"));
        assert!(!is_valid_url("placehold.co/600x400.png"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_text_value_separates_missing_from_non_text() {
        assert_eq!(text_value(&None), Some(""));
        assert_eq!(text_value(&Some(" AI ".into())), Some("AI"));

        let number: Option<TextField> = serde_json::from_str("42").unwrap();
        assert_eq!(text_value(&number), None);
        let list: Option<TextField> = serde_json::from_str(r#"["AI"]"#).unwrap();
        assert_eq!(text_value(&list), None);
        let null: Option<TextField> = serde_json::from_str("null").unwrap();
        assert_eq!(text_value(&null), Some(""));
    }

    #[derive(Debug, Default, serde::Deserialize)]
    struct NameForm {
        name: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(axum::body::Body::from(body)).unwrap()
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<NameForm, AppError> {
        Submission::<NameForm>::from_request(request(content_type, body), &())
            .await
            .map(|Submission(value)| value)
    }

    #[tokio::test]
    async fn test_submission_reads_json_and_urlencoded() {
        let json = extract(Some("application/json"), r#"{"name": "Alex"}"#).await.unwrap();
        assert_eq!(json.name.as_deref(), Some("Alex"));

        let form = extract(Some("application/x-www-form-urlencoded"), "name=Alex+Doe")
            .await
            .unwrap();
        assert_eq!(form.name.as_deref(), Some("Alex Doe"));
    }

    #[tokio::test]
    async fn test_submission_without_content_type_is_json() {
        let value = extract(None, r#"{"name": "Alex"}"#).await.unwrap();
        assert_eq!(value.name.as_deref(), Some("Alex"));
    }

    #[tokio::test]
    async fn test_submission_empty_body_has_no_fields() {
        for body in ["", "  \n"] {
            let value = extract(Some("application/json"), body).await.unwrap();
            assert!(value.name.is_none());
        }
    }

    #[tokio::test]
    async fn test_submission_bad_json_is_a_validation_error() {
        for body in ["{not json", r#"{"name": 42}"#, "[1, 2]"] {
            let err = extract(Some("application/json"), body).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{body}");
        }
    }

    #[test]
    fn test_trimmed_handles_none_and_padding() {
        assert_eq!(trimmed(&None), "");
        assert_eq!(trimmed(&Some("  AI  ".to_string())), "AI");
    }
}
