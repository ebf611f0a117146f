//! Transcribe recording use case

use crate::application::cancel::CancelToken;
use crate::application::mapper::map_payload;
use crate::application::poller::poll_until_done;
use crate::application::ports::{Authenticator, JobClient};
use crate::domain::credentials::Credentials;
use crate::domain::error::OrchestrationError;
use crate::domain::poll_policy::PollPolicy;
use crate::domain::transcription::{AudioPayload, Transcript, TranscriptionConfig};

/// Input parameters for one transcription call
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    pub credentials: Credentials,
    pub audio: AudioPayload,
    pub config: TranscriptionConfig,
    pub policy: PollPolicy,
}

/// Callbacks for stage transitions, used by the CLI for status output
#[derive(Default)]
pub struct TranscribeCallbacks {
    /// Called after a token was obtained
    pub on_authenticated: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called with the job id once the upload was accepted
    pub on_submitted: Option<Box<dyn Fn(&str) + Send + Sync>>,
}

/// One-shot transcription orchestration.
///
/// Sequences authenticate, submit, poll, and map, short-circuiting on
/// the first error. No cross-stage retry here: each call owns its token,
/// job id, and poll state, so concurrent calls need no coordination, and
/// the caller decides whether a failed call is worth repeating.
pub struct TranscribeUseCase<A, J>
where
    A: Authenticator,
    J: JobClient,
{
    authenticator: A,
    job_client: J,
    cancel: CancelToken,
}

impl<A, J> TranscribeUseCase<A, J>
where
    A: Authenticator,
    J: JobClient,
{
    /// Create a new use case instance
    pub fn new(authenticator: A, job_client: J) -> Self {
        Self {
            authenticator,
            job_client,
            cancel: CancelToken::new(),
        }
    }

    /// Get the cancellation token for external signal handling
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Execute the transcription workflow
    pub async fn execute(
        &self,
        input: TranscribeInput,
        callbacks: TranscribeCallbacks,
    ) -> Result<Transcript, OrchestrationError> {
        input.credentials.validate()?;
        input.config.validate()?;
        if input.audio.is_empty() {
            return Err(OrchestrationError::SubmitFailed(
                "audio payload is empty".to_string(),
            ));
        }

        if self.cancel.is_cancelled() {
            return Err(OrchestrationError::Cancelled);
        }

        let token = self.authenticator.authenticate(&input.credentials).await?;
        if let Some(ref cb) = callbacks.on_authenticated {
            cb();
        }

        let job_id = self
            .job_client
            .submit(&token, input.audio, &input.config)
            .await?;
        tracing::info!(job_id = %job_id, model = %input.config.model, "transcription job submitted");
        if let Some(ref cb) = callbacks.on_submitted {
            cb(job_id.as_str());
        }

        let payload =
            poll_until_done(&self.job_client, &token, &job_id, &input.policy, &self.cancel).await?;

        map_payload(payload)
    }
}
