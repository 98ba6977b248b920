//! Form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Stable key used in error maps and tool parameters.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Correo",
            Field::Phone => "Teléfono",
        }
    }

    /// Lowercase noun used inside validation messages.
    pub(crate) fn noun(&self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Email => "correo",
            Field::Phone => "teléfono",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
