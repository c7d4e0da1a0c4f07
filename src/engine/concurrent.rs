// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded-concurrency batch execution.
//!
//! Every job is spawned onto the tokio runtime up front and waits on a shared
//! [`Semaphore`] before invoking the dispatcher, so at most `max_concurrency`
//! jobs run at once. Jobs are independent: one job's failure is recorded in its
//! own envelope and never affects the others.
//!
//! # Examples
//!
//! ```rust
//! use the_textsmith::engine::ConcurrentExecutor;
//!
//! // Create with specific concurrency limit
//! let executor = ConcurrentExecutor::new(8);
//!
//! // Create with default concurrency (CPU core count)
//! let executor = ConcurrentExecutor::default();
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::Instrument;

use crate::config::JobConfig;
use crate::dispatch::OperationDispatcher;
use crate::errors::ExecutionError;
use crate::observability::messages::engine::{BatchCompleted, BatchStarted, JobFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{BatchExecutor, JobResult};

pub struct ConcurrentExecutor {
    dispatcher: OperationDispatcher,
    max_concurrency: usize,
}

impl ConcurrentExecutor {
    /// Creates an executor allowing `max_concurrency` jobs in flight.
    /// Zero is clamped to 1.
    pub fn new(max_concurrency: usize) -> Self {
        Self::with_dispatcher(OperationDispatcher::new(), max_concurrency)
    }

    pub fn with_dispatcher(dispatcher: OperationDispatcher, max_concurrency: usize) -> Self {
        Self {
            dispatcher,
            max_concurrency: max_concurrency.max(1),
        }
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    async fn run(&self, jobs: Vec<JobConfig>) -> Result<Vec<JobResult>, ExecutionError> {
        let start_time = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = Vec::with_capacity(jobs.len());

        for job in jobs {
            let semaphore_clone = semaphore.clone();
            let dispatcher = self.dispatcher;
            let job_id = job.id.clone();

            let task = tokio::spawn(
                async move {
                    let _permit = semaphore_clone.acquire().await.map_err(|_| {
                        ExecutionError::SemaphoreClosed {
                            job_id: job.id.clone(),
                        }
                    })?;

                    let envelope = dispatcher.invoke(&job.operation, &job.text, &job.options);

                    if let Some(error) = envelope.error() {
                        JobFailed {
                            job_id: &job.id,
                            operation: &job.operation,
                            error,
                        }
                        .log();
                    }

                    Ok::<_, ExecutionError>(JobResult {
                        id: job.id,
                        envelope,
                    })
                }
                .instrument(tracing::Span::current()),
            );

            tasks.push((job_id, task));
        }

        // Await in submission order so results line up with the input jobs.
        let mut results = Vec::with_capacity(tasks.len());
        for (job_id, task) in tasks {
            let result = task
                .await
                .map_err(|e| ExecutionError::TaskFailed {
                    job_id,
                    message: e.to_string(),
                })??;
            results.push(result);
        }

        BatchCompleted {
            job_count: results.len(),
            failed_count: results.iter().filter(|r| !r.envelope.is_success()).count(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(results)
    }
}

impl Default for ConcurrentExecutor {
    fn default() -> Self {
        let max_concurrency = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        Self::new(max_concurrency)
    }
}

#[async_trait]
impl BatchExecutor for ConcurrentExecutor {
    async fn execute(&self, jobs: Vec<JobConfig>) -> Result<Vec<JobResult>, ExecutionError> {
        let started = BatchStarted {
            job_count: jobs.len(),
            max_concurrency: self.max_concurrency,
        };
        let span = started.span("batch");
        started.log();

        self.run(jobs).instrument(span).await
    }
}
