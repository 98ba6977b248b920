//! Data models for the contact form.
//!
//! Raw input, the validated record persisted to the `contactos` table, and
//! the transient submission status.

pub mod contact;
pub mod status;

pub use contact::{ContactRecord, RawContact};
pub use status::{SubmissionStatus, FAILURE_PREFIX, SUCCESS_MESSAGE};
