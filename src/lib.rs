//! VoxScribe - asynchronous speech-to-text for stored recordings
//!
//! This crate submits audio recordings to the VITO (ReturnZero) speech-to-text
//! API and waits for the finished transcript, with bounded exponential-backoff
//! polling and cooperative cancellation.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, entities, and errors (credentials, jobs, transcripts)
//! - **Application**: The orchestration use case, poller, result mapper, and port traits
//! - **Infrastructure**: Adapter implementations (VITO HTTP client, XDG config store)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
