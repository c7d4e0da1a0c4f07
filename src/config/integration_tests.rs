// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::path::Path;

use crate::config::{
    load_and_validate_batch, load_settings, Environment, LogLevel, Settings, Transport,
};

/// The sample settings file parses and resolves to the staging profile
#[test]
fn test_settings_yaml_loading() {
    let settings = load_settings(Some(Path::new("configs/settings.yaml"))).unwrap();

    // Environment variables may override these in a developer shell; only check
    // fields that have no environment override.
    assert_eq!(settings.server_name, "mcp-production");
    assert_eq!(settings.transport, Transport::Stdio);
    assert_eq!(settings.tool_prefix, "text_");
    assert_eq!(settings.max_concurrency, Some(4));
}

/// Environment overlay on top of the sample file
#[test]
fn test_settings_yaml_with_environment_overlay() {
    let content = std::fs::read_to_string("configs/settings.yaml").unwrap();
    let file = serde_yaml::from_str(&content).unwrap();

    let env = HashMap::from([
        ("ENVIRONMENT".to_string(), "production".to_string()),
        ("PRODUCTION_BASE_URL".to_string(), "https://prod.example.com".to_string()),
    ]);
    let settings = Settings::resolve(file, &env).unwrap();

    assert_eq!(settings.environment, Environment::Production);
    assert!(!settings.debug);
    assert_eq!(settings.base_url, "https://prod.example.com");
    // The file's explicit level beats the production default of warn.
    assert_eq!(settings.log_level, LogLevel::Info);
}

/// The demo batch loads with every job in file order
#[test]
fn test_batch_demo_yaml_loading() {
    let batch = load_and_validate_batch("configs/batch-demo.yaml").unwrap();

    assert_eq!(batch.max_concurrency, Some(2));
    let ids: Vec<_> = batch.jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["shout", "identifier", "stats", "scrub", "contacts", "digest", "column", "bogus"]
    );
    assert_eq!(batch.jobs[1].operation, "text_transform_case");
    assert_eq!(batch.jobs[6].options["width"], 10);
}
