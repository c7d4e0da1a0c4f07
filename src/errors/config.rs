// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for settings and batch file loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown environment '{0}'. Expected one of: local, staging, production")]
    UnknownEnvironment(String),

    #[error("Invalid log level '{0}'. Expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Duplicate job ID: '{0}'")]
    DuplicateJobId(String),

    #[error("Batch contains no jobs")]
    EmptyBatch,

    #[error("max_concurrency must be at least 1, got {0}")]
    InvalidConcurrency(usize),
}
