//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::poll_policy::{PollPolicy, DEFAULT_MAX_ATTEMPTS};
use crate::domain::transcription::{ModelId, TranscriptionConfig, DEFAULT_SPEAKER_COUNT};
use crate::domain::wait::WaitDuration;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub model: Option<String>,
    pub diarization: Option<bool>,
    pub speakers: Option<u32>,
    pub max_wait: Option<String>,
    pub max_attempts: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            model: Some(ModelId::default().to_string()),
            diarization: Some(false),
            speakers: Some(DEFAULT_SPEAKER_COUNT),
            max_wait: Some(WaitDuration::default_max_wait().to_string()),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            client_id: other.client_id.or(self.client_id),
            client_secret: other.client_secret.or(self.client_secret),
            model: other.model.or(self.model),
            diarization: other.diarization.or(self.diarization),
            speakers: other.speakers.or(self.speakers),
            max_wait: other.max_wait.or(self.max_wait),
            max_attempts: other.max_attempts.or(self.max_attempts),
        }
    }

    /// Get model as parsed ModelId, or default if not set/invalid
    pub fn model_or_default(&self) -> ModelId {
        self.model
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get diarization setting, or false if not set
    pub fn diarization_or_default(&self) -> bool {
        self.diarization.unwrap_or(false)
    }

    /// Get speaker count, or the default if not set
    pub fn speakers_or_default(&self) -> u32 {
        self.speakers.unwrap_or(DEFAULT_SPEAKER_COUNT)
    }

    /// Get max_wait as parsed WaitDuration, or default if not set/invalid
    pub fn max_wait_or_default(&self) -> WaitDuration {
        self.max_wait
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get attempt budget, or the default if not set
    pub fn max_attempts_or_default(&self) -> u32 {
        self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    /// Assemble the per-job transcription config from the merged settings
    pub fn transcription_config(&self) -> TranscriptionConfig {
        let config = TranscriptionConfig::new(self.model_or_default());
        if self.diarization_or_default() {
            config.with_diarization(self.speakers_or_default())
        } else {
            config
        }
    }

    /// Assemble the poll policy from the merged settings
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy::new(
            self.max_wait_or_default().as_std(),
            self.max_attempts_or_default(),
        )
    }
}
