//! Contact models: the raw form input and the validated record that is persisted.

use crate::domain::{ContactName, EmailAddress, Field, PhoneNumber};
use serde::{Deserialize, Serialize};

/// The three form values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RawContact {
    /// Build raw input from anything string-like.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Current value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
        }
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when all three fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A validated contact, ready to be inserted into the `contactos` table.
///
/// Only the validation schema builds these from user input, and each field
/// re-validates on deserialization. Serializes with the table's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "nombre")]
    pub name: ContactName,

    #[serde(rename = "correo")]
    pub email: EmailAddress,

    #[serde(rename = "telefono")]
    pub phone: PhoneNumber,
}

impl ContactRecord {
    pub fn new(name: ContactName, email: EmailAddress, phone: PhoneNumber) -> Self {
        Self { name, email, phone }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ContactRecord {
        ContactRecord::new(
            ContactName::new("Ana Gomez").unwrap(),
            EmailAddress::new("ana@example.com").unwrap(),
            PhoneNumber::new("12345678").unwrap(),
        )
    }

    #[test]
    fn test_record_uses_table_columns() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana Gomez",
                "correo": "ana@example.com",
                "telefono": "12345678"
            })
        );
    }

    #[test]
    fn test_record_deserialization_revalidates() {
        let result: Result<ContactRecord, _> = serde_json::from_str(
            r#"{"nombre": "Ana Gomez", "correo": "ana@example.com", "telefono": "123"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_contact_field_access() {
        let mut raw = RawContact::default();
        assert!(raw.is_empty());

        raw.set(Field::Email, "ana@example.com");
        assert_eq!(raw.get(Field::Email), "ana@example.com");
        assert!(!raw.is_empty());

        raw.clear();
        assert!(raw.is_empty());
    }
}
