// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while validating or running a text operation.
//!
//! The `Display` text of every variant is what ends up in the `error` field of a
//! failed [`ResultEnvelope`](crate::envelope::ResultEnvelope), so messages are
//! written for the caller rather than for a log file.

use thiserror::Error;

/// Failure of a single operation invocation.
///
/// The first five variants are validation failures detected before a component
/// runs. `Execution` covers faults raised by the component itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationError {
    /// The requested operation name is not registered.
    #[error("Unknown operation: {name}. Available: {available}")]
    UnknownOperation { name: String, available: String },

    /// An enumerated parameter (case type, pattern type, ...) has an unknown value.
    #[error("Unsupported {kind}: {value}. Available: {available}")]
    UnsupportedValue {
        kind: &'static str,
        value: String,
        available: String,
    },

    /// A required parameter was not supplied.
    #[error("Missing required parameter '{parameter}' for '{operation}'")]
    MissingParameter { operation: String, parameter: String },

    /// A parameter name the operation does not accept.
    #[error("Unknown parameter '{parameter}' for '{operation}'. Accepted: {accepted}")]
    UnknownParameter {
        operation: String,
        parameter: String,
        accepted: String,
    },

    /// A parameter of the wrong JSON type or outside its allowed range.
    #[error("Invalid value for parameter '{parameter}': expected {expected}, got {found}")]
    InvalidParameter {
        parameter: String,
        expected: &'static str,
        found: String,
    },

    /// The component started but could not complete.
    #[error("{context} failed: {message}")]
    Execution {
        context: &'static str,
        message: String,
    },
}

impl OperationError {
    /// True for failures detected before the component was invoked.
    pub fn is_validation(&self) -> bool {
        !matches!(self, OperationError::Execution { .. })
    }
}
