//! Signal handling for in-flight transcriptions

use colored::Colorize;

use crate::application::cancel::CancelToken;

/// Wires Ctrl+C to an orchestration's cancellation token.
///
/// The first interrupt cancels the in-flight call, which then unwinds
/// through the normal error path instead of killing the process mid-poll.
pub struct ShutdownSignal {
    cancel: CancelToken,
}

impl ShutdownSignal {
    /// Create a handler around the given cancellation token
    pub fn new(cancel: CancelToken) -> Self {
        Self { cancel }
    }

    /// Check if cancellation was requested
    pub fn is_shutdown(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Setup the signal handler
    pub fn setup(&self) {
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("{} Interrupt received, cancelling...", "↓".cyan());
                cancel.cancel();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_signal_default_is_false() {
        let signal = ShutdownSignal::new(CancelToken::new());
        assert!(!signal.is_shutdown());
    }

    #[test]
    fn shutdown_tracks_token() {
        let token = CancelToken::new();
        let signal = ShutdownSignal::new(token.clone());
        token.cancel();
        assert!(signal.is_shutdown());
    }
}
