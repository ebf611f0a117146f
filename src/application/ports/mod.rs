//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod authenticator;
pub mod config;
pub mod job_client;

// Re-export common types
pub use authenticator::Authenticator;
pub use config::ConfigStore;
pub use job_client::{JobClient, JobSnapshot, RawUtterance, TranscriptionPayload};
