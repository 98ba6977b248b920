//! Domain validation errors.

use super::field::Field;
use super::phone::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use std::fmt;

/// A single violated field constraint.
///
/// The `Display` output is the message shown inline under the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value has fewer characters than allowed.
    TooShort { field: Field, min: usize },

    /// The value has more characters than allowed.
    TooLong { field: Field, max: usize },

    /// The value does not match the expected format.
    InvalidFormat { field: Field },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> Field {
        match self {
            Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field } => *field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { field, min } => {
                write!(f, "El {} debe tener al menos {} caracteres", field.noun(), min)
            }
            Self::TooLong { field, max } => {
                write!(f, "El {} no puede exceder {} caracteres", field.noun(), max)
            }
            Self::InvalidFormat { field: Field::Email } => write!(f, "Correo electrónico inválido"),
            Self::InvalidFormat { field: Field::Phone } => write!(
                f,
                "Ingrese un número de teléfono válido ({}–{} dígitos)",
                MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            ),
            Self::InvalidFormat { field: Field::Name } => write!(f, "Nombre inválido"),
        }
    }
}

impl std::error::Error for ValidationError {}
