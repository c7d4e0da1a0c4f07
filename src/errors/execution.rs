// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Infrastructure failures while running a batch.
//!
//! A job whose operation fails still produces a `success:false` envelope; these
//! errors only cover the executor itself breaking down.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Job '{job_id}' task failed to complete: {message}")]
    TaskFailed { job_id: String, message: String },

    #[error("Concurrency limiter closed while scheduling job '{job_id}'")]
    SemaphoreClosed { job_id: String },
}
