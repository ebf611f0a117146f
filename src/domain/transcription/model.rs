//! Provider transcription models

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error when an invalid model name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid model: \"{input}\". Valid models are: sommers, whisper")]
pub struct InvalidModelError {
    pub input: String,
}

/// Transcription models supported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelId {
    #[default]
    Sommers,
    Whisper,
}

impl ModelId {
    /// Provider wire name of the model
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sommers => "sommers",
            Self::Whisper => "whisper",
        }
    }

    /// All supported models
    pub const fn all() -> &'static [ModelId] {
        &[ModelId::Sommers, ModelId::Whisper]
    }
}

impl FromStr for ModelId {
    type Err = InvalidModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sommers" => Ok(Self::Sommers),
            "whisper" => Ok(Self::Whisper),
            _ => Err(InvalidModelError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
