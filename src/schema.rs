//! Validation schema for the contact form.
//!
//! Each field is checked independently against its value object, and every
//! violation is collected: a bad name never hides a bad phone number.

use crate::domain::{ContactName, EmailAddress, Field, PhoneNumber, ValidationError};
use crate::models::{ContactRecord, RawContact};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Per-field validation errors with fixed keys `name`, `email` and `phone`.
///
/// Produced fresh by every [`validate`] call; never merged with a previous pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    phone: Option<ValidationError>,
}

impl FieldErrors {
    /// Error for one field, if any.
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
        }
    }

    /// Human-readable message for one field, if it failed.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Record an error under the field it belongs to.
    pub fn insert(&mut self, error: ValidationError) {
        let slot = match error.field() {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = Some(error);
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    /// Failing fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|err| (field, err)))
    }
}

// Serialized as {"name": msg|null, "email": msg|null, "phone": msg|null}.
impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for field in Field::ALL {
            map.serialize_entry(field.key(), &self.message(field))?;
        }
        map.end()
    }
}

/// Validate raw form input.
///
/// Returns the typed record when all three fields pass, otherwise the errors of
/// every failing field. Pure: the same input always yields the same result.
pub fn validate(raw: &RawContact) -> Result<ContactRecord, FieldErrors> {
    let name = ContactName::new(raw.name.as_str());
    let email = EmailAddress::new(raw.email.as_str());
    let phone = PhoneNumber::new(raw.phone.as_str());

    match (name, email, phone) {
        (Ok(name), Ok(email), Ok(phone)) => Ok(ContactRecord::new(name, email, phone)),
        (name, email, phone) => {
            let mut errors = FieldErrors::default();
            for err in [name.err(), email.err(), phone.err()].into_iter().flatten() {
                errors.insert(err);
            }
            Err(errors)
        }
    }
}
