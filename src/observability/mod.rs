// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structured logging for the dispatcher, the batch engine and configuration.
//!
//! Message types live in [`messages`], one module per subsystem. Each is a small
//! struct with a `Display` implementation and a [`messages::StructuredLog`]
//! implementation that emits the same event with typed fields, so log text is
//! never assembled ad hoc at call sites.
//!
//! # Usage
//!
//! ```rust
//! use the_textsmith::observability::messages::{dispatch::InvocationStarted, StructuredLog};
//!
//! let msg = InvocationStarted {
//!     operation: "transform_case",
//!     input_size: 11,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(settings.debug)
        .with_writer(std::io::stderr)
        .try_init();
}
