//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the VITO API and local configuration storage.

pub mod config;
pub mod provider;

// Re-export adapters
pub use config::XdgConfigStore;
pub use provider::RtzrClient;
