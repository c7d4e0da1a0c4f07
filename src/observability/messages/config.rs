// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Settings resolved from file and environment.
///
/// # Log Level
/// `info!` - Startup event
pub struct SettingsLoaded<'a> {
    pub environment: &'a str,
    pub log_level: &'a str,
    pub source: Option<&'a std::path::Path>,
}

impl Display for SettingsLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.source {
            Some(path) => write!(
                f,
                "Settings loaded from {}: environment={}, log_level={}",
                path.display(),
                self.environment,
                self.log_level
            ),
            None => write!(
                f,
                "Settings loaded from defaults: environment={}, log_level={}",
                self.environment, self.log_level
            ),
        }
    }
}

impl StructuredLog for SettingsLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            environment = self.environment,
            log_level = self.log_level,
            source = ?self.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "settings_loaded",
            span_name = name,
            environment = self.environment,
        )
    }
}

/// Batch file parsed and validated.
///
/// # Log Level
/// `debug!` - Detailed diagnostic
pub struct BatchLoaded<'a> {
    pub path: &'a std::path::Path,
    pub job_count: usize,
}

impl Display for BatchLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Batch loaded from {}: {} jobs",
            self.path.display(),
            self.job_count
        )
    }
}

impl StructuredLog for BatchLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            job_count = self.job_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "batch_loaded",
            span_name = name,
            job_count = self.job_count,
        )
    }
}
