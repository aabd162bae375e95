//! Form validation.
//!
//! Every validator checks all of its fields before deciding, so the user
//! sees every problem at once. Errors are keyed by the field id that the
//! page's `[data-for=<field-id>]` error span points at. A validator returns
//! the cleaned-up values only when every field passes; callers perform no
//! side effects otherwise.

use demo_shop_core::{Email, Rating, Review};
use serde::Deserialize;

/// Minimum trimmed length for person names.
pub const MIN_NAME_LEN: usize = 2;
/// Minimum trimmed length for review comments.
pub const MIN_COMMENT_LEN: usize = 5;
/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field ids, as used by the `[data-for]` error spans.
pub mod fields {
    pub const REV_NAME: &str = "rev-name";
    pub const REV_RATING: &str = "rev-rating";
    pub const REV_COMMENT: &str = "rev-comment";
    pub const LOG_EMAIL: &str = "log-email";
    pub const LOG_PASS: &str = "log-pass";
    pub const REG_NAME: &str = "reg-name";
    pub const REG_EMAIL: &str = "reg-email";
    pub const REG_PASS: &str = "reg-pass";
    pub const REG_CONFIRM: &str = "reg-confirm";
}

/// Error messages shown next to invalid fields.
pub mod messages {
    pub const NAME_TOO_SHORT: &str = "Enter at least 2 characters.";
    pub const RATING_RANGE: &str = "Rating must be 1-5.";
    pub const COMMENT_TOO_SHORT: &str = "Enter at least 5 characters.";
    pub const INVALID_EMAIL: &str = "Enter a valid email.";
    pub const WEAK_PASSWORD: &str = "Min 6 chars, include 1 uppercase & 1 number.";
    pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
}

/// One invalid field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// The invalid fields of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` when `failed` holds.
    pub fn check(&mut self, failed: bool, field: &'static str, message: &'static str) {
        if failed {
            self.errors.push(FieldError { field, message });
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for `field`, or `""` when it is valid. An empty message
    /// clears the field's error span.
    #[must_use]
    pub fn message(&self, field: &str) -> &'static str {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map_or("", |e| e.message)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Trim whitespace, including a stray byte order mark.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

// =============================================================================
// Form Types
// =============================================================================

/// Raw review form values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewForm {
    pub name: String,
    pub rating: String,
    pub comment: String,
}

/// Raw login form values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw registration form values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// A login that passed validation. Credentials are never checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub email: Email,
}

/// A registration that passed validation. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: Email,
}

// =============================================================================
// Validators
// =============================================================================

/// Validate a review submission.
///
/// # Errors
///
/// Returns the invalid fields if any check fails.
pub fn review(form: &ReviewForm) -> Result<Review, FieldErrors> {
    let name = trim(&form.name);
    let comment = trim(&form.comment);
    let rating = trim(&form.rating).parse::<Rating>();

    let mut errors = FieldErrors::new();
    errors.check(char_len(name) < MIN_NAME_LEN, fields::REV_NAME, messages::NAME_TOO_SHORT);
    errors.check(rating.is_err(), fields::REV_RATING, messages::RATING_RANGE);
    errors.check(
        char_len(comment) < MIN_COMMENT_LEN,
        fields::REV_COMMENT,
        messages::COMMENT_TOO_SHORT,
    );

    match rating {
        Ok(rating) if errors.is_empty() => Ok(Review {
            name: name.to_string(),
            rating,
            comment: comment.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Validate a login submission.
///
/// # Errors
///
/// Returns the invalid fields if any check fails.
pub fn login(form: &LoginForm) -> Result<ValidLogin, FieldErrors> {
    let email = Email::parse(trim(&form.email));

    let mut errors = FieldErrors::new();
    errors.check(email.is_err(), fields::LOG_EMAIL, messages::INVALID_EMAIL);
    errors.check(
        char_len(&form.password) < MIN_PASSWORD_LEN,
        fields::LOG_PASS,
        messages::PASSWORD_TOO_SHORT,
    );

    match email {
        Ok(email) if errors.is_empty() => Ok(ValidLogin { email }),
        _ => Err(errors),
    }
}

/// Validate a registration submission.
///
/// # Errors
///
/// Returns the invalid fields if any check fails.
pub fn register(form: &RegisterForm) -> Result<ValidRegistration, FieldErrors> {
    let name = trim(&form.name);
    let email = Email::parse(trim(&form.email));

    let mut errors = FieldErrors::new();
    errors.check(char_len(name) < MIN_NAME_LEN, fields::REG_NAME, messages::NAME_TOO_SHORT);
    errors.check(email.is_err(), fields::REG_EMAIL, messages::INVALID_EMAIL);
    errors.check(
        !is_strong_password(&form.password),
        fields::REG_PASS,
        messages::WEAK_PASSWORD,
    );
    errors.check(
        form.confirm != form.password,
        fields::REG_CONFIRM,
        messages::PASSWORD_MISMATCH,
    );

    match email {
        Ok(email) if errors.is_empty() => Ok(ValidRegistration {
            name: name.to_string(),
            email,
        }),
        _ => Err(errors),
    }
}

/// At least six characters with an ASCII uppercase letter and a digit.
#[must_use]
pub fn is_strong_password(password: &str) -> bool {
    char_len(password) >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
