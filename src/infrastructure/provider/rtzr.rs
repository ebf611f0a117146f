//! ReturnZero VITO API client adapter

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    Authenticator, JobClient, JobSnapshot, RawUtterance, TranscriptionPayload,
};
use crate::domain::credentials::{AccessToken, Credentials};
use crate::domain::error::OrchestrationError;
use crate::domain::job::{JobId, JobStatus};
use crate::domain::transcription::{AudioPayload, TranscriptionConfig};

/// VITO API base URL
const API_BASE_URL: &str = "https://openapi.vito.ai";

/// Per-request timeout, independent of the overall poll deadline, so a
/// single hung connection cannot stall the loop past its attempt budget.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Request types for the VITO API

#[derive(Debug, Serialize)]
struct JobConfigBody {
    model_name: String,
    use_diarization: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diarization: Option<DiarizationBody>,
}

#[derive(Debug, Serialize)]
struct DiarizationBody {
    spk_count: u32,
}

impl From<&TranscriptionConfig> for JobConfigBody {
    fn from(config: &TranscriptionConfig) -> Self {
        Self {
            model_name: config.model.to_string(),
            use_diarization: config.diarization,
            diarization: config.diarization.then_some(DiarizationBody {
                spk_count: config.speaker_count,
            }),
        }
    }
}

// Response types for the VITO API

#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    results: Option<WireResults>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResults {
    utterances: Vec<WireUtterance>,
}

#[derive(Debug, Deserialize)]
struct WireUtterance {
    start_at: i64,
    duration: i64,
    spk: Option<i64>,
    msg: String,
}

/// VITO speech-to-text client.
///
/// Holds one shared `reqwest::Client`; constructed once at process
/// start and passed by handle into each orchestration call. No other
/// state is retained between calls.
#[derive(Clone)]
pub struct RtzrClient {
    client: reqwest::Client,
    base_url: String,
}

impl RtzrClient {
    /// Create a client against the production VITO endpoint
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn auth_url(&self) -> String {
        format!("{}/v1/authenticate", self.base_url)
    }

    fn submit_url(&self) -> String {
        format!("{}/v1/transcribe", self.base_url)
    }

    fn status_url(&self, job_id: &JobId) -> String {
        format!("{}/v1/transcribe/{}", self.base_url, job_id)
    }
}

impl Default for RtzrClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a provider speaker index to a display label (0 -> "A", 1 -> "B")
fn speaker_label(index: i64) -> String {
    if (0..26).contains(&index) {
        let letter = (b'A' + index as u8) as char;
        letter.to_string()
    } else {
        index.to_string()
    }
}

fn to_payload(results: WireResults) -> TranscriptionPayload {
    TranscriptionPayload {
        utterances: results
            .utterances
            .into_iter()
            .map(|u| RawUtterance {
                speaker: u.spk.map(speaker_label),
                start_ms: u.start_at,
                end_ms: u.start_at.saturating_add(u.duration),
                text: u.msg,
            })
            .collect(),
    }
}

#[async_trait]
impl Authenticator for RtzrClient {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, OrchestrationError> {
        credentials.validate()?;

        let response = self
            .client
            .post(self.auth_url())
            .form(&[
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
            ])
            .send()
            .await
            .map_err(|e| OrchestrationError::AuthFailed(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OrchestrationError::AuthFailed(format!("read body: {}", e)))?;

        if !status.is_success() {
            return Err(OrchestrationError::AuthFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: AuthResponse = serde_json::from_str(&body)
            .map_err(|e| OrchestrationError::AuthFailed(format!("parse response: {}", e)))?;

        match parsed.access_token {
            Some(token) if !token.is_empty() => {
                tracing::debug!("bearer token obtained");
                Ok(AccessToken::new(token))
            }
            _ => Err(OrchestrationError::AuthFailed(format!(
                "response missing access_token: {}",
                body
            ))),
        }
    }
}

#[async_trait]
impl JobClient for RtzrClient {
    async fn submit(
        &self,
        token: &AccessToken,
        audio: AudioPayload,
        config: &TranscriptionConfig,
    ) -> Result<JobId, OrchestrationError> {
        if audio.is_empty() {
            return Err(OrchestrationError::SubmitFailed(
                "audio payload is empty".to_string(),
            ));
        }
        config.validate()?;

        let file_name = audio.file_name();
        let mime = audio.mime_type().as_str();
        let file_part = multipart::Part::bytes(audio.into_data())
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|e| OrchestrationError::SubmitFailed(format!("mime: {}", e)))?;

        let config_json = serde_json::to_string(&JobConfigBody::from(config))
            .map_err(|e| OrchestrationError::SubmitFailed(format!("encode config: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("config", config_json);

        tracing::debug!(url = %self.submit_url(), "uploading audio");

        let response = self
            .client
            .post(self.submit_url())
            .bearer_auth(token.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| OrchestrationError::SubmitFailed(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OrchestrationError::SubmitFailed(format!("read body: {}", e)))?;

        if !status.is_success() {
            return Err(OrchestrationError::SubmitFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: SubmitResponse = serde_json::from_str(&body)
            .map_err(|e| OrchestrationError::SubmitFailed(format!("parse response: {}", e)))?;

        parsed
            .id
            .and_then(JobId::new)
            .ok_or_else(|| OrchestrationError::SubmitFailed(format!("response missing job id: {}", body)))
    }

    async fn fetch_status(
        &self,
        token: &AccessToken,
        job_id: &JobId,
    ) -> Result<JobSnapshot, OrchestrationError> {
        let response = self
            .client
            .get(self.status_url(job_id))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| OrchestrationError::Transport(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OrchestrationError::Transport(format!("read body: {}", e)))?;

        if !status.is_success() {
            return Err(OrchestrationError::Transport(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: StatusResponse = serde_json::from_str(&body)
            .map_err(|e| OrchestrationError::Transport(format!("parse response: {}", e)))?;

        let job_status = match parsed.status.parse::<JobStatus>() {
            Ok(s) => s,
            Err(_) => {
                // Unrecognized statuses are treated as retryable
                // in-progress states, never as terminal.
                tracing::warn!(
                    job_id = %job_id,
                    status = %parsed.status,
                    "unrecognized job status, treating as in-progress"
                );
                JobStatus::Transcribing
            }
        };

        Ok(JobSnapshot {
            status: job_status,
            payload: parsed.results.map(to_payload),
            failure_reason: parsed.message,
        })
    }
}
