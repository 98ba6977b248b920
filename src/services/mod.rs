//! Application service layer.
//!
//! The submission controller holds the form state and orchestrates the
//! validation schema and the storage client. The MCP handlers talk only to it.

mod submission_controller;

pub use submission_controller::{FormState, SubmissionController, SubmitOutcome};
