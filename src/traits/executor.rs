// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Serialize;

use crate::config::JobConfig;
use crate::envelope::ResultEnvelope;
use crate::errors::ExecutionError;

/// Outcome of one batch job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobResult {
    pub id: String,
    pub envelope: ResultEnvelope,
}

#[async_trait]
pub trait BatchExecutor: Send + Sync {
    /// Run every job and return one result per job, in the order given.
    ///
    /// A job whose operation fails still yields a result carrying a failure
    /// envelope. `Err` is reserved for the executor itself breaking down, such
    /// as a worker task panicking or the concurrency limiter closing.
    async fn execute(&self, jobs: Vec<JobConfig>) -> Result<Vec<JobResult>, ExecutionError>;
}
