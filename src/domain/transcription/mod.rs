//! Transcription domain module

mod audio_payload;
mod job_config;
mod model;
mod transcript;

pub use audio_payload::{AudioMimeType, AudioPayload};
pub use job_config::{TranscriptionConfig, DEFAULT_SPEAKER_COUNT};
pub use model::{InvalidModelError, ModelId};
pub use transcript::{Transcript, Utterance};
