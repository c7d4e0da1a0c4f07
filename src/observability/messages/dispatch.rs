// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for single operation invocations.
//!
//! Only input sizes are logged, never the text itself.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Invocation received.
///
/// # Log Level
/// `debug!` - High-volume per-call event
pub struct InvocationStarted<'a> {
    pub operation: &'a str,
    pub input_size: usize,
}

impl Display for InvocationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invocation of '{}' started: input_size={} bytes",
            self.operation, self.input_size
        )
    }
}

impl StructuredLog for InvocationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            operation = self.operation,
            input_size = self.input_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "invocation",
            span_name = name,
            operation = self.operation,
            input_size = self.input_size,
        )
    }
}

/// Invocation completed with a successful envelope.
///
/// # Log Level
/// `info!` - Important operational event
pub struct InvocationCompleted<'a> {
    pub operation: &'a str,
    pub input_size: usize,
    pub duration: std::time::Duration,
}

impl Display for InvocationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invocation of '{}' completed: input={} bytes, duration={:?}",
            self.operation, self.input_size, self.duration
        )
    }
}

impl StructuredLog for InvocationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            operation = self.operation,
            input_size = self.input_size,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "invocation_completed",
            span_name = name,
            operation = self.operation,
            duration = ?self.duration,
        )
    }
}

/// Invocation rejected during validation; the component never ran.
///
/// # Log Level
/// `warn!` - Caller error, not a fault
pub struct InvocationRejected<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invocation of '{}' rejected: {}", self.operation, self.error)
    }
}

impl StructuredLog for InvocationRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "invocation_rejected",
            span_name = name,
            operation = self.operation,
            error = %self.error,
        )
    }
}

/// Component failed after validation passed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct InvocationFailed<'a> {
    pub operation: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for InvocationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invocation of '{}' failed: {}", self.operation, self.error)
    }
}

impl StructuredLog for InvocationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            operation = self.operation,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "invocation_failed",
            span_name = name,
            operation = self.operation,
            error = %self.error,
        )
    }
}
