//! Contactos Form - contact capture with validation and Supabase persistence.
//!
//! Collects a name, email address and phone number, validates all three
//! against fixed rules, and inserts the record into the `contactos` table,
//! reporting success or failure through a single status banner.
//!
//! # Architecture
//!
//! - **domain**: Value objects for each field, validated at construction
//! - **schema**: Validates raw input into a record or per-field errors
//! - **models**: Raw input, the persisted record, and the submission status
//! - **services**: The submission controller that owns the form state
//! - **client**: HTTP client for the Supabase REST endpoint
//! - **view**: Render model of the form
//! - **server**: MCP protocol server exposing the form as tools
//! - **config**, **error**, **metrics**: Ambient plumbing

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod schema;
pub mod server;
pub mod services;
pub mod view;

pub use client::{AsyncStorageClient, AsyncSupabaseClient, SupabaseClient};
pub use config::Config;
pub use domain::{Field, ValidationError};
pub use error::{ConfigError, StorageError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactRecord, RawContact, SubmissionStatus};
pub use schema::{validate, FieldErrors};
pub use server::ContactFormServer;
pub use services::{FormState, SubmissionController, SubmitOutcome};
pub use view::FormView;
