//! Transcription job port interface

use async_trait::async_trait;

use crate::domain::credentials::AccessToken;
use crate::domain::error::OrchestrationError;
use crate::domain::job::{JobId, JobStatus};
use crate::domain::transcription::{AudioPayload, TranscriptionConfig};

/// Provider-shaped utterance as delivered in a terminal payload.
///
/// Offsets are signed here: the mapper, not the transport, decides
/// whether negative values are an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUtterance {
    pub speaker: Option<String>,
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}

/// Terminal result payload of a completed job, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptionPayload {
    pub utterances: Vec<RawUtterance>,
}

/// One observation of a job's provider-side state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    pub status: JobStatus,
    /// Present when status is `Completed`
    pub payload: Option<TranscriptionPayload>,
    /// Provider failure reason when status is `Failed`
    pub failure_reason: Option<String>,
}

/// Port for submitting and observing transcription jobs.
#[async_trait]
pub trait JobClient: Send + Sync {
    /// Upload audio and job configuration, obtaining a job identifier.
    ///
    /// Fails fast with `SubmitFailed` on empty audio or invalid config.
    /// Never retried locally: submission is not assumed idempotent, a
    /// resubmission could duplicate jobs or double-bill.
    async fn submit(
        &self,
        token: &AccessToken,
        audio: AudioPayload,
        config: &TranscriptionConfig,
    ) -> Result<JobId, OrchestrationError>;

    /// Query the job's status once.
    ///
    /// Transport problems and non-2xx responses surface as
    /// `Transport`, which the poller treats as a retryable attempt.
    async fn fetch_status(
        &self,
        token: &AccessToken,
        job_id: &JobId,
    ) -> Result<JobSnapshot, OrchestrationError>;
}
