//! Synthesis error types

use thiserror::Error;

/// Errors surfaced while assembling the resource graph.
///
/// Only configuration-shape problems live here. Provisioning failures
/// (invalid instance types, exhausted quota, missing zones) are reported by
/// the external control plane at apply time and are not modeled.
#[derive(Error, Debug)]
pub enum StackError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StackError>;
