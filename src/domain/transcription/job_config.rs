//! Transcription job configuration

use crate::domain::error::OrchestrationError;
use crate::domain::transcription::ModelId;

/// Default expected speaker count when diarization is enabled
pub const DEFAULT_SPEAKER_COUNT: u32 = 2;

/// Per-job configuration sent alongside the audio upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscriptionConfig {
    /// Model to transcribe with
    pub model: ModelId,
    /// Whether to annotate utterances with speaker labels
    pub diarization: bool,
    /// Expected speaker count; only meaningful when diarization is enabled
    pub speaker_count: u32,
}

impl TranscriptionConfig {
    pub fn new(model: ModelId) -> Self {
        Self {
            model,
            diarization: false,
            speaker_count: DEFAULT_SPEAKER_COUNT,
        }
    }

    /// Enable diarization with the expected number of speakers
    pub fn with_diarization(mut self, speaker_count: u32) -> Self {
        self.diarization = true;
        self.speaker_count = speaker_count;
        self
    }

    /// Check invariants before submission.
    pub fn validate(&self) -> Result<(), OrchestrationError> {
        if self.diarization && self.speaker_count < 1 {
            return Err(OrchestrationError::SubmitFailed(format!(
                "speaker_count must be >= 1 when diarization is enabled, got {}",
                self.speaker_count
            )));
        }
        Ok(())
    }
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self::new(ModelId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_diarization() {
        let config = TranscriptionConfig::default();
        assert_eq!(config.model, ModelId::Sommers);
        assert!(!config.diarization);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn diarization_with_speakers() {
        let config = TranscriptionConfig::new(ModelId::Whisper).with_diarization(3);
        assert!(config.diarization);
        assert_eq!(config.speaker_count, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn diarization_requires_positive_speakers() {
        let config = TranscriptionConfig::default().with_diarization(0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, OrchestrationError::SubmitFailed(_)));
    }

    #[test]
    fn speaker_count_ignored_without_diarization() {
        let config = TranscriptionConfig {
            diarization: false,
            speaker_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
