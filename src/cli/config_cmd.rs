//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::credentials::mask;
use crate::domain::error::ConfigError;
use crate::domain::transcription::ModelId;
use crate::domain::wait::WaitDuration;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "client_id" => config.client_id = Some(value.to_string()),
        "client_secret" => config.client_secret = Some(value.to_string()),
        "model" => config.model = Some(value.to_string()),
        "diarization" => {
            config.diarization =
                Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'true' or 'false'".to_string(),
                })?)
        }
        "speakers" => {
            config.speakers = Some(parse_count(value).map_err(|m| ConfigError::ValidationError {
                key: key.to_string(),
                message: m,
            })?)
        }
        "max_wait" => config.max_wait = Some(value.to_string()),
        "max_attempts" => {
            config.max_attempts =
                Some(parse_count(value).map_err(|m| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: m,
                })?)
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;

    // Never echo the secret back
    let shown = if key == "client_secret" {
        mask(value)
    } else {
        value.to_string()
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "client_id" => config.client_id,
        "client_secret" => config.client_secret.map(|s| mask(&s)),
        "model" => config.model,
        "diarization" => config.diarization.map(|b| b.to_string()),
        "speakers" => config.speakers.map(|n| n.to_string()),
        "max_wait" => config.max_wait,
        "max_attempts" => config.max_attempts.map(|n| n.to_string()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "client_id",
        config.client_id.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "client_secret",
        &config
            .client_secret
            .map(|s| mask(&s))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("model", config.model.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "diarization",
        &config
            .diarization
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "speakers",
        &config
            .speakers
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value("max_wait", config.max_wait.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "max_attempts",
        &config
            .max_attempts
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "model" => {
            value
                .parse::<ModelId>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        "diarization" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        "speakers" | "max_attempts" => {
            parse_count(value).map_err(|m| ConfigError::ValidationError {
                key: key.to_string(),
                message: m,
            })?;
        }
        "max_wait" => {
            value
                .parse::<WaitDuration>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
        }
        _ => {} // client_id / client_secret accept any string
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Parse a positive count
fn parse_count(value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        Ok(_) => Err("Value must be at least 1".to_string()),
        Err(_) => Err("Value must be a positive integer".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn parse_count_values() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("30"), Ok(30));
        assert!(parse_count("0").is_err());
        assert!(parse_count("-1").is_err());
        assert!(parse_count("lots").is_err());
    }

    #[test]
    fn validate_model_valid() {
        assert!(validate_config_value("model", "sommers").is_ok());
        assert!(validate_config_value("model", "whisper").is_ok());
    }

    #[test]
    fn validate_model_invalid() {
        assert!(validate_config_value("model", "gpt-4o").is_err());
    }

    #[test]
    fn validate_max_wait_valid() {
        assert!(validate_config_value("max_wait", "30s").is_ok());
        assert!(validate_config_value("max_wait", "5m").is_ok());
        assert!(validate_config_value("max_wait", "2m30s").is_ok());
    }

    #[test]
    fn validate_max_wait_invalid() {
        assert!(validate_config_value("max_wait", "soon").is_err());
    }

    #[test]
    fn validate_diarization_bool() {
        assert!(validate_config_value("diarization", "true").is_ok());
        assert!(validate_config_value("diarization", "maybe").is_err());
    }

    #[test]
    fn validate_secret_accepts_any_string() {
        assert!(validate_config_value("client_secret", "s3cr3t!#").is_ok());
    }
}
