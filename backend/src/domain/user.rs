//! Acting user identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    /// The identifier was empty.
    #[error("{kind} id must not be empty")]
    Empty { kind: &'static str },
    /// The identifier had leading or trailing whitespace.
    #[error("{kind} id must not have surrounding whitespace")]
    SurroundingWhitespace { kind: &'static str },
}

pub(crate) fn validate_identifier(
    raw: &str,
    kind: &'static str,
) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::SurroundingWhitespace { kind });
    }
    Ok(())
}

/// Stable user identifier.
///
/// Identifiers are opaque strings issued by whatever system authenticated the
/// caller; only emptiness and surrounding whitespace are rejected.
///
/// # Examples
/// ```
/// use webinars_backend::domain::UserId;
///
/// let alice = UserId::new("alice").expect("valid id");
/// assert_eq!(alice.as_ref(), "alice");
/// assert!(UserId::new(" alice").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let id = id.into();
        validate_identifier(&id, "user")?;
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = IdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The user on whose behalf a command runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
}

impl User {
    /// Build a user from its identifier.
    pub fn new(id: UserId) -> Self {
        Self { id }
    }
}
