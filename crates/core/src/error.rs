//! Error types for Sensor Console
//!
//! This module provides unified error handling across the console,
//! covering transport failures, API status errors, payload decoding,
//! and configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Sensor Console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Request never produced a response (connection refused, DNS, build)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    // ========================================================================
    // Decode Errors
    // ========================================================================
    /// JSON serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record field carrying encoded JSON could not be decoded
    #[error("Failed to decode field '{field}': {message}")]
    FieldDecode {
        field: &'static str,
        message: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration contents
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {message}")]
    ConfigRead { path: PathBuf, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ConsoleError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ConsoleError::Transport(msg.into())
    }

    /// Create an API status error
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        ConsoleError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a field decode error
    pub fn field_decode(field: &'static str, msg: impl Into<String>) -> Self {
        ConsoleError::FieldDecode {
            field,
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ConsoleError::Config(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, ConsoleError::Transport(_) | ConsoleError::Api { .. })
    }

    /// Check if this error is a payload decode error
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ConsoleError::Json(_) | ConsoleError::FieldDecode { .. }
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ConsoleError::Config(_) | ConsoleError::ConfigRead { .. }
        )
    }

    /// The HTTP status code, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T>;
}

impl<T, E: Into<ConsoleError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T> {
        self.map_err(|e| {
            let err: ConsoleError = e.into();
            ConsoleError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
