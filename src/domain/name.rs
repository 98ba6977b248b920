//! ContactName value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum name length, in characters.
pub const MIN_NAME_CHARS: usize = 3;

/// Maximum name length, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// A contact's display name, between 3 and 50 characters long.
///
/// Length is counted in Unicode scalar values, so "Íñigo" has five characters.
///
/// # Example
///
/// ```
/// use contactos_form::domain::ContactName;
///
/// let name = ContactName::new("Ana Gomez").unwrap();
/// assert_eq!(name.as_str(), "Ana Gomez");
/// assert!(ContactName::new("ab").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` or `ValidationError::TooLong`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let len = name.chars().count();

        if len < MIN_NAME_CHARS {
            return Err(ValidationError::TooShort {
                field: Field::Name,
                min: MIN_NAME_CHARS,
            });
        }
        if len > MAX_NAME_CHARS {
            return Err(ValidationError::TooLong {
                field: Field::Name,
                max: MAX_NAME_CHARS,
            });
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
