// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for batch execution lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Batch start and completion
//! * Individual job failures inside a batch

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Batch started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_textsmith::observability::messages::engine::BatchStarted;
///
/// let msg = BatchStarted {
///     job_count: 5,
///     max_concurrency: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BatchStarted {
    pub job_count: usize,
    pub max_concurrency: usize,
}

impl Display for BatchStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting batch: {} jobs, max_concurrency={}",
            self.job_count, self.max_concurrency
        )
    }
}

impl StructuredLog for BatchStarted {
    fn log(&self) {
        tracing::info!(
            job_count = self.job_count,
            max_concurrency = self.max_concurrency,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch",
            span_name = name,
            job_count = self.job_count,
            max_concurrency = self.max_concurrency,
        )
    }
}

/// Batch finished; every job produced an envelope.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BatchCompleted {
    pub job_count: usize,
    pub failed_count: usize,
    pub duration: std::time::Duration,
}

impl Display for BatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch completed: {} jobs ({} failed) in {:?}",
            self.job_count, self.failed_count, self.duration
        )
    }
}

impl StructuredLog for BatchCompleted {
    fn log(&self) {
        tracing::info!(
            job_count = self.job_count,
            failed_count = self.failed_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "batch_completed",
            span_name = name,
            job_count = self.job_count,
            failed_count = self.failed_count,
        )
    }
}

/// A job's envelope reported failure.
///
/// # Log Level
/// `warn!` - The batch continues
pub struct JobFailed<'a> {
    pub job_id: &'a str,
    pub operation: &'a str,
    pub error: &'a str,
}

impl Display for JobFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Job '{}' ({}) failed: {}",
            self.job_id, self.operation, self.error
        )
    }
}

impl StructuredLog for JobFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            job_id = self.job_id,
            operation = self.operation,
            error = self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "job_failed",
            span_name = name,
            job_id = self.job_id,
            operation = self.operation,
        )
    }
}
