use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ValidationError;

/// A stored contact-form submission. Never updated once written.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated submission that has not been persisted yet.
///
/// The fields are private so that every `NewContact` has gone through
/// [`NewContact::new`] and carries a non-empty name and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    message: Option<String>,
}

impl NewContact {
    /// Rejects a blank `name` or `email`. Accepted values are stored exactly
    /// as given; an empty message is stored as absent.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }

        Ok(NewContact {
            name,
            email,
            message: message.filter(|m| !m.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
