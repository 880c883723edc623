// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod notify;
pub mod pipeline;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::GitHubClient;
pub use config::{Config, EnvSettings};
pub use error::{NotifierError, NotifierResult, TransportError};
pub use models::*;
pub use pipeline::{run, RunOptions, RunOutcome};
