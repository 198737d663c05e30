// SPDX-License-Identifier: MIT

//! Typed error handling for certflow-rs
//!
//! The expression engine reports its own [`EvalError`]/[`DecodeError`];
//! this top-level enum wraps them together with the I/O and configuration
//! failures the binary can hit.

use thiserror::Error;

use super::workflow::expr::{DecodeError, EvalError};

/// Top-level error type for certflow-rs
#[derive(Debug, Error)]
pub enum CertflowError {
    /// Rule evaluation errors
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Structural rule decode errors
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration errors (missing files, invalid arguments)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl CertflowError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<&str> for CertflowError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for CertflowError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}
