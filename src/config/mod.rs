// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod batch;
mod catalog;
mod registry;
mod settings;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use batch::{load_and_validate_batch, load_batch, BatchConfig, JobConfig};
pub use catalog::{
    CaseTypeCatalog, CleaningOptionCatalog, EncodingCatalog, FormatOperationCatalog,
    PatternCatalog, ResourceCatalog, ResourceInfo,
};
pub use registry::{operation_specs, OperationSpec, ParameterDescriptor};
pub use settings::{
    load_settings, Environment, LogLevel, Settings, SettingsFile, Transport,
};
