//! VoxScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vox_scribe::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    TranscribeOptions,
};
use vox_scribe::domain::config::AppConfig;
use vox_scribe::domain::transcription::ModelId;
use vox_scribe::domain::wait::WaitDuration;
use vox_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let audio_file = match cli.audio_file {
        Some(path) => path,
        None => {
            presenter.error("Missing audio file. Usage: vox-scribe <AUDIO_FILE>");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        client_id: None, // credentials come from env/file only
        client_secret: None,
        model: cli.model.map(|m| ModelId::from(m).to_string()),
        diarization: if cli.diarization { Some(true) } else { None },
        speakers: cli.speakers,
        max_wait: cli.max_wait.clone(),
        max_attempts: cli.max_attempts,
    };

    // Merge config: defaults < file < env < cli
    let config = load_merged_config(cli_config).await;

    // Reject a malformed deadline instead of silently falling back
    if let Some(raw) = config.max_wait.as_ref() {
        if raw.parse::<WaitDuration>().is_err() {
            presenter.error(&format!("Invalid max-wait: \"{}\"", raw));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    }

    let options = TranscribeOptions {
        audio_file,
        config: config.transcription_config(),
        policy: config.poll_policy(),
        json: cli.json,
        output: cli.output,
    };

    run_oneshot(options).await
}

/// Initialize tracing with env-filter support (RUST_LOG)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
