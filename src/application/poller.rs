//! Bounded polling loop for asynchronous transcription jobs

use std::time::Instant;

use crate::application::cancel::CancelToken;
use crate::application::ports::{JobClient, TranscriptionPayload};
use crate::domain::credentials::AccessToken;
use crate::domain::error::OrchestrationError;
use crate::domain::job::{JobId, JobStatus};
use crate::domain::poll_policy::PollPolicy;

/// Poll the job until it reaches a terminal state or a policy bound trips.
///
/// Iterative by design: bounded stack, bounded attempts, bounded elapsed
/// time, and cancellable mid-wait. Every branch produces exactly one
/// terminal outcome: a payload, `JobFailed`, `PollTimeout`, or
/// `Cancelled`. A terminal status is never polled again.
pub async fn poll_until_done<C: JobClient>(
    client: &C,
    token: &AccessToken,
    job_id: &JobId,
    policy: &PollPolicy,
    cancel: &CancelToken,
) -> Result<TranscriptionPayload, OrchestrationError> {
    let started = Instant::now();
    let mut delay = policy.initial_delay.min(policy.max_delay);

    for attempt in 1..=policy.max_attempts {
        if cancel.is_cancelled() {
            return Err(OrchestrationError::Cancelled);
        }

        match client.fetch_status(token, job_id).await {
            Ok(snapshot) => match snapshot.status {
                JobStatus::Completed => {
                    tracing::debug!(job_id = %job_id, attempt, "job completed");
                    return snapshot.payload.ok_or_else(|| {
                        OrchestrationError::Transport(
                            "completed job carried no result payload".to_string(),
                        )
                    });
                }
                JobStatus::Failed => {
                    let reason = snapshot
                        .failure_reason
                        .unwrap_or_else(|| "no reason given by provider".to_string());
                    tracing::debug!(job_id = %job_id, attempt, %reason, "job failed");
                    return Err(OrchestrationError::JobFailed(reason));
                }
                JobStatus::Submitted | JobStatus::Transcribing => {
                    tracing::debug!(
                        job_id = %job_id,
                        attempt,
                        status = %snapshot.status,
                        "job still in progress"
                    );
                }
            },
            // A broken status query is not a terminal job state; it
            // counts against the attempt budget and is retried.
            Err(OrchestrationError::Transport(cause)) => {
                tracing::warn!(job_id = %job_id, attempt, %cause, "status query failed, retrying");
            }
            Err(other) => return Err(other),
        }

        if attempt == policy.max_attempts {
            break;
        }
        let elapsed = started.elapsed();
        if elapsed >= policy.max_elapsed {
            break;
        }

        // Never sleep past the deadline.
        let sleep_for = delay.min(policy.max_elapsed - elapsed);
        tokio::select! {
            _ = cancel.cancelled() => return Err(OrchestrationError::Cancelled),
            _ = tokio::time::sleep(sleep_for) => {}
        }

        delay = policy.next_delay(delay);
    }

    Err(OrchestrationError::PollTimeout)
}
