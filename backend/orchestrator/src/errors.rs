//! Error types for the orchestrator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    /// A contract rejected the call. `reason` is the contract's own text.
    #[error("{contract} rejected the call: {reason} (code: {code})")]
    Contract {
        contract: &'static str,
        code: u32,
        reason: String,
    },

    #[error("Deployment error: {0}")]
    Deployment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
