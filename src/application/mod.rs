//! Application layer - Use cases and port interfaces
//!
//! Contains the core orchestration logic and trait definitions
//! for external system interactions.

pub mod cancel;
pub mod mapper;
pub mod poller;
pub mod ports;
pub mod transcribe;

// Re-export use cases
pub use cancel::CancelToken;
pub use mapper::map_payload;
pub use poller::poll_until_done;
pub use transcribe::{TranscribeCallbacks, TranscribeInput, TranscribeUseCase};
