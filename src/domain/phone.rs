//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Fewest digits accepted in a phone number.
pub const MIN_PHONE_DIGITS: usize = 8;

/// Most digits accepted in a phone number.
pub const MAX_PHONE_DIGITS: usize = 12;

/// A phone number made of 8 to 12 ASCII digits and nothing else.
///
/// No formatting characters are accepted: spaces, dashes, parentheses and a
/// leading '+' all make the number invalid.
///
/// # Example
///
/// ```
/// use contactos_form::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("12345678").unwrap();
/// assert_eq!(phone.as_str(), "12345678");
/// assert!(PhoneNumber::new("+1-555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFormat` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidFormat { field: Field::Phone });
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        // All ASCII, so byte length equals digit count.
        (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&phone.len())
            && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
