//! Main app runner for one-shot mode

use std::env;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{TranscribeCallbacks, TranscribeInput, TranscribeUseCase};
use crate::domain::config::AppConfig;
use crate::domain::credentials::Credentials;
use crate::domain::transcription::{AudioMimeType, AudioPayload, Transcript};
use crate::infrastructure::{RtzrClient, XdgConfigStore};

use super::args::TranscribeOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run a one-shot transcription
pub async fn run_oneshot(options: TranscribeOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    // Load credentials from environment or config
    let credentials = match get_credentials().await {
        Ok(creds) => creds,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Read the recording before anything touches the network
    let audio = match load_audio_file(&options.audio_file).await {
        Ok(audio) => audio,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    presenter.info(&format!(
        "Loaded {} ({})",
        options.audio_file.display(),
        audio.human_readable_size()
    ));

    // Create adapters and use case
    let client = RtzrClient::new();
    let use_case = TranscribeUseCase::new(client.clone(), client);

    // Wire Ctrl+C to the in-flight call
    let shutdown = ShutdownSignal::new(use_case.cancel_token());
    shutdown.setup();

    let input = TranscribeInput {
        credentials,
        audio,
        config: options.config,
        policy: options.policy,
    };

    presenter.start_spinner("Authenticating...");
    let auth_spinner = presenter.spinner();
    let submit_spinner = presenter.spinner();
    let callbacks = TranscribeCallbacks {
        on_authenticated: Some(Box::new(move || {
            if let Some(ref bar) = auth_spinner {
                bar.set_message("Uploading recording...");
            }
        })),
        on_submitted: Some(Box::new(move |job_id: &str| {
            if let Some(ref bar) = submit_spinner {
                bar.set_message(format!("Waiting for job {}...", job_id));
            }
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(transcript) => {
            presenter.spinner_success("Transcription complete");
            let rendered = if options.json {
                match serde_json::to_string_pretty(&transcript) {
                    Ok(json) => json,
                    Err(e) => {
                        presenter.error(&format!("Failed to serialize transcript: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                }
            } else {
                format_transcript(&transcript)
            };

            match options.output {
                Some(path) => {
                    if let Err(e) = tokio::fs::write(&path, &rendered).await {
                        presenter.error(&format!(
                            "Failed to write transcript to {}: {}",
                            path.display(),
                            e
                        ));
                        return ExitCode::from(EXIT_ERROR);
                    }
                    presenter.success(&format!("Transcript written to {}", path.display()));
                }
                None => presenter.output(&rendered),
            }

            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Get API credentials from environment or config file
pub async fn get_credentials() -> Result<Credentials, String> {
    // Check environment first
    let env_id = env::var("RTZR_CLIENT_ID").ok().filter(|s| !s.is_empty());
    let env_secret = env::var("RTZR_CLIENT_SECRET")
        .ok()
        .filter(|s| !s.is_empty());
    if let (Some(id), Some(secret)) = (env_id.clone(), env_secret.clone()) {
        return Ok(Credentials::new(id, secret));
    }

    // Check config file, letting env override either half
    let store = XdgConfigStore::new();
    let config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let id = env_id.or(config.client_id).ok_or_else(|| {
        "Missing credentials. Set RTZR_CLIENT_ID / RTZR_CLIENT_SECRET or run 'vox-scribe config set client_id <id>'".to_string()
    })?;
    let secret = env_secret.or(config.client_secret).ok_or_else(|| {
        "Missing credentials. Set RTZR_CLIENT_ID / RTZR_CLIENT_SECRET or run 'vox-scribe config set client_secret <secret>'".to_string()
    })?;

    Ok(Credentials::new(id, secret))
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Build env config
    let env_config = AppConfig {
        client_id: env::var("RTZR_CLIENT_ID").ok().filter(|s| !s.is_empty()),
        client_secret: env::var("RTZR_CLIENT_SECRET")
            .ok()
            .filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Read an audio file into an upload payload
pub async fn load_audio_file(path: &Path) -> Result<AudioPayload, String> {
    let mime_type = AudioMimeType::from_path(path).ok_or_else(|| {
        format!(
            "Unsupported audio format: {}. Supported: wav, mp3, flac, ogg, webm, m4a",
            path.display()
        )
    })?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    if data.is_empty() {
        return Err(format!("Audio file is empty: {}", path.display()));
    }

    Ok(AudioPayload::new(data, mime_type))
}

/// Render a transcript as plain text, one utterance per line
pub fn format_transcript(transcript: &Transcript) -> String {
    let mut lines = Vec::with_capacity(transcript.len());
    for utterance in transcript.utterances() {
        let range = format!(
            "[{} - {}]",
            format_timestamp(utterance.start_ms),
            format_timestamp(utterance.end_ms)
        );
        match &utterance.speaker {
            Some(speaker) => lines.push(format!("{} {}: {}", range, speaker, utterance.text)),
            None => lines.push(format!("{} {}", range, utterance.text)),
        }
    }
    lines.join("\n")
}

/// Format a millisecond offset as mm:ss.d
fn format_timestamp(ms: u64) -> String {
    let total_secs = ms / 1000;
    let tenths = (ms % 1000) / 100;
    format!("{:02}:{:02}.{}", total_secs / 60, total_secs % 60, tenths)
}
