// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `dispatch` - single invocation lifecycle (started, completed, rejected, failed)
//! * `engine` - batch execution lifecycle
//! * `config` - settings and batch file loading
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_textsmith::observability::messages::engine::BatchStarted;
//!
//! let msg = BatchStarted {
//!     job_count: 5,
//!     max_concurrency: 4,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod config;
pub mod dispatch;
pub mod engine;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
