use serde::Deserialize;

use crate::forms::{has_min_chars, is_valid_email, is_valid_roll_no, trimmed, FieldErrors};
use crate::models::user::{Role, User};

const EMAIL_INVALID: &str = "Please enter a valid email.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Validated login. There is no credential store; the password is only checked for presence.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub role: Role,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let email = trimmed(&self.email);
        let password = self.password.as_deref().unwrap_or_default();
        let role = trimmed(&self.role);

        let mut errors = FieldErrors::new();
        if !is_valid_email(email) {
            errors.push("email", EMAIL_INVALID);
        }
        if password.is_empty() {
            errors.push("password", "Password is required.");
        }
        let role = if role.is_empty() {
            errors.push("role", "You must select a role.");
            None
        } else {
            let parsed = Role::parse(role);
            if parsed.is_none() {
                errors.push("role", "Role must be either participant or organizer.");
            }
            parsed
        };

        match role {
            Some(role) if errors.is_empty() => Ok(LoginRequest {
                email: email.to_string(),
                role,
            }),
            _ => Err(errors),
        }
    }
}

impl LoginRequest {
    /// The stand-in profile for a login, named by role.
    pub fn into_user(self) -> User {
        let name = match self.role {
            Role::Organizer => "Event Organizer",
            Role::Participant => "Alex Doe",
        };
        User {
            name: name.to_string(),
            email: self.email,
            role: self.role,
            year: None,
            roll_no: None,
            phone: None,
        }
    }
}

/// Signup year may arrive as a JSON number or as text from a form post.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

impl YearInput {
    fn as_year(&self) -> Option<u32> {
        let n = match self {
            YearInput::Number(n) => *n,
            YearInput::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        u32::try_from(n).ok().filter(|y| *y >= 1)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: Option<String>,
    pub year: Option<YearInput>,
    pub roll_no: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignupForm {
    /// Validates every field. New accounts are always participants.
    pub fn validate(&self) -> Result<User, FieldErrors> {
        let name = trimmed(&self.name);
        let roll_no = trimmed(&self.roll_no);
        let email = trimmed(&self.email);
        let phone = trimmed(&self.phone);
        let password = self.password.as_deref().unwrap_or_default();
        let confirm = self.confirm_password.as_deref().unwrap_or_default();

        let mut errors = FieldErrors::new();
        if !has_min_chars(name, 2) {
            errors.push("name", "Name must be at least 2 characters.");
        }
        let year = self.year.as_ref().and_then(YearInput::as_year);
        if year.is_none() {
            errors.push("year", "Please enter a valid year.");
        }
        if !is_valid_roll_no(roll_no) {
            errors.push("rollNo", "Enter a valid roll number (e.g., 23R01A05A1).");
        }
        if !is_valid_email(email) {
            errors.push("email", EMAIL_INVALID);
        }
        if !has_min_chars(phone, 10) {
            errors.push("phone", "Please enter a valid phone number.");
        }
        if !has_min_chars(password, 8) {
            errors.push("password", "Password must be at least 8 characters.");
        }
        if password != confirm {
            errors.push("confirmPassword", "Passwords don't match.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(User {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Participant,
            year,
            roll_no: Some(roll_no.to_string()),
            phone: Some(phone.to_string()),
        })
    }
}
