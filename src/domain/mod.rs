//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod credentials;
pub mod error;
pub mod job;
pub mod poll_policy;
pub mod transcription;
pub mod wait;

// Re-export common types
pub use config::AppConfig;
pub use credentials::{AccessToken, Credentials};
pub use error::*;
pub use job::{JobId, JobStatus};
pub use poll_policy::PollPolicy;
pub use transcription::{
    AudioMimeType, AudioPayload, ModelId, Transcript, TranscriptionConfig, Utterance,
};
pub use wait::WaitDuration;
