// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // settings, batch files, registry + catalog
pub mod dispatch;   // named invocation -> component
pub mod engine;     // batch executors
pub mod envelope;   // uniform result shape
pub mod errors;     // error handling
pub mod observability;
pub mod processors; // pure text components
pub mod prompts;
pub mod traits;     // unified abstractions
