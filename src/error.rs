//! Simulator error types.

use thiserror::Error;

/// Errors surfaced by the schedulers and their input/output adapters
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchedError {
    /// A parameter is outside its domain (quantum < 1, alpha outside [0, 1],
    /// an empty process set)
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A line of process input could not be parsed
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// JSON serialization of a result failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedError {
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn malformed_input(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn empty_workload() -> Self {
        Self::invalid_parameter("processes", "at least one process is required")
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

pub type Result<T> = std::result::Result<T, SchedError>;
