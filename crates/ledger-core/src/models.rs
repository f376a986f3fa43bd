use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Column width of `item` and `name`, carried over from the original schema.
pub const MAX_TEXT_LEN: usize = 240;

/// A single expense entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub id: i64,
    pub amount: i64,
    pub item: String,
    /// Assigned by the server at creation time.
    pub record_date: DateTime<Utc>,
}

/// Input for inserting a new expense record.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub amount: i64,
    pub item: String,
}

impl NewRecord {
    pub fn new(amount: i64, item: impl Into<String>) -> Self {
        Self {
            amount,
            item: item.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("item", &self.item)
    }
}

/// Full replacement of a record's mutable fields.
///
/// `record_date` is optional: when absent the stored date is kept.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub amount: i64,
    pub item: String,
    pub record_date: Option<DateTime<Utc>>,
}

impl RecordUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("item", &self.item)
    }
}

/// A stored user account. The password is only ever held as a PHC hash string.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub password_hash: String,
}

/// Input for inserting or overwriting a user row, with the password already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
}

/// Plaintext name/password pair as submitted by a caller.
///
/// The name is trimmed on construction so `" bob "` and `"bob"` are the same login.
#[derive(Clone)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        let name: String = name.into();
        Self {
            name: name.trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("name", &self.name)?;
        if self.password.is_empty() {
            return Err(AppError::ValidationError(
                "password must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!(
            "{field} must not be empty"
        )));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::ValidationError(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters"
        )));
    }
    Ok(())
}
