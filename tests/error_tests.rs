//! Error scenario integration tests

use std::process::Command;

fn vox_scribe_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vox-scribe"))
}

#[test]
fn missing_credentials_error() {
    // No credentials in env or config: the run must fail fast, before
    // any file read or network call
    let output = vox_scribe_bin()
        .arg("a.wav")
        .env_remove("RTZR_CLIENT_ID")
        .env_remove("RTZR_CLIENT_SECRET")
        .env("HOME", "/nonexistent") // Prevent reading config file
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("credentials") || stderr.contains("RTZR_CLIENT_ID"),
        "Expected error about missing credentials, got: {}",
        stderr
    );
}

#[test]
fn missing_audio_file_error() {
    // Credentials present but the recording does not exist
    let output = vox_scribe_bin()
        .arg("/nonexistent/recording.wav")
        .env("RTZR_CLIENT_ID", "test-id")
        .env("RTZR_CLIENT_SECRET", "test-secret")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read"),
        "Expected error about unreadable file, got: {}",
        stderr
    );
}

#[test]
fn unsupported_audio_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"not audio").unwrap();

    let output = vox_scribe_bin()
        .arg(&path)
        .env("RTZR_CLIENT_ID", "test-id")
        .env("RTZR_CLIENT_SECRET", "test-secret")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported audio format"),
        "Expected error about unsupported format, got: {}",
        stderr
    );
}

#[test]
fn config_get_unknown_key() {
    let output = vox_scribe_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = vox_scribe_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_model() {
    let output = vox_scribe_bin()
        .args(["config", "set", "model", "gpt-4o"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid") || stderr.contains("model"),
        "Expected error about invalid model, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let output = vox_scribe_bin()
        .args(["config", "set", "diarization", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_max_wait() {
    let output = vox_scribe_bin()
        .args(["config", "set", "max_wait", "whenever"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid duration") || stderr.contains("max_wait"),
        "Expected error about invalid duration, got: {}",
        stderr
    );
}

#[test]
fn config_set_zero_attempts() {
    let output = vox_scribe_bin()
        .args(["config", "set", "max_attempts", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("at least 1"),
        "Expected error about minimum attempts, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    // config list works without a config file (uses empty config)
    let output = vox_scribe_bin()
        .args(["config", "list"])
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("client_id"));
    assert!(stdout.contains("model"));
    assert!(stdout.contains("max_wait"));
}
