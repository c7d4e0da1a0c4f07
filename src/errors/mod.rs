// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod operation;

pub use config::ConfigError;
pub use execution::ExecutionError;
pub use operation::OperationError;
