//! Domain value objects and types.
//!
//! Type-safe wrappers for the three contact form fields. Each value object
//! validates at construction time, so an invalid name, email address or phone
//! number cannot be represented once it has left the schema.

pub mod email;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::Field;
pub use name::{ContactName, MAX_NAME_CHARS, MIN_NAME_CHARS};
pub use phone::{PhoneNumber, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
