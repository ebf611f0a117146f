//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::poll_policy::PollPolicy;
use crate::domain::transcription::{ModelId, TranscriptionConfig};

/// VoxScribe - speech-to-text for stored recordings via the VITO API
#[derive(Parser, Debug)]
#[command(name = "vox-scribe")]
#[command(version)]
#[command(about = "Submit a stored audio recording for transcription and wait for the result")]
#[command(long_about = None)]
pub struct Cli {
    /// Audio file to transcribe (wav, mp3, flac, ogg, webm, m4a)
    #[arg(value_name = "AUDIO_FILE")]
    pub audio_file: Option<PathBuf>,

    /// Transcription model
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<ModelArg>,

    /// Annotate utterances with speaker labels
    #[arg(short = 'd', long)]
    pub diarization: bool,

    /// Expected number of speakers
    #[arg(short = 's', long, value_name = "COUNT", requires = "diarization")]
    pub speakers: Option<u32>,

    /// Overall deadline for the job (e.g. 30s, 5m, 2m30s)
    #[arg(long, value_name = "TIME")]
    pub max_wait: Option<String>,

    /// Maximum number of status polls
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Print the transcript as JSON
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Write the transcript to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Model argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    Sommers,
    Whisper,
}

impl From<ModelArg> for ModelId {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Sommers => ModelId::Sommers,
            ModelArg::Whisper => ModelId::Whisper,
        }
    }
}

impl From<ModelId> for ModelArg {
    fn from(id: ModelId) -> Self {
        match id {
            ModelId::Sommers => ModelArg::Sommers,
            ModelId::Whisper => ModelArg::Whisper,
        }
    }
}

/// Parsed transcribe options (one-shot run)
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub audio_file: PathBuf,
    pub config: TranscriptionConfig,
    pub policy: PollPolicy,
    pub json: bool,
    pub output: Option<PathBuf>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "client_id",
    "client_secret",
    "model",
    "diarization",
    "speakers",
    "max_wait",
    "max_attempts",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
