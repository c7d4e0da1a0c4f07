// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::dispatch::Options;
use crate::errors::ConfigError;
use crate::observability::messages::{config::BatchLoaded, StructuredLog};

/// A file of independent invocations to run together.
///
/// # Example
/// ```yaml
/// max_concurrency: 4
/// jobs:
///   - id: shout
///     operation: transform_case
///     text: "hello world"
///     options:
///       case_type: upper
///   - id: stats
///     operation: analyze_text
///     text: "One. Two!"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    pub max_concurrency: Option<usize>,
    pub jobs: Vec<JobConfig>,
}

/// One invocation inside a batch.
///
/// Operation names and options are not checked here; the dispatcher reports
/// them per job in the job's envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub id: String,
    pub operation: String,
    pub text: String,
    #[serde(default)]
    pub options: Options,
}

/// Load a batch from a YAML file without validating it.
pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<BatchConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Load a batch and check that it has jobs, unique ids and a usable
/// concurrency limit.
pub fn load_and_validate_batch<P: AsRef<Path>>(path: P) -> Result<BatchConfig, ConfigError> {
    let path = path.as_ref();
    let batch = load_batch(path)?;
    batch.validate()?;

    BatchLoaded {
        path,
        job_count: batch.jobs.len(),
    }
    .log();

    Ok(batch)
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jobs.is_empty() {
            return Err(ConfigError::EmptyBatch);
        }

        if let Some(0) = self.max_concurrency {
            return Err(ConfigError::InvalidConcurrency(0));
        }

        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(job.id.as_str()) {
                return Err(ConfigError::DuplicateJobId(job.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_batch(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_batch() {
        let yaml = r#"
max_concurrency: 2
jobs:
  - id: shout
    operation: transform_case
    text: hello
    options:
      case_type: upper
  - id: wrap
    operation: format_text
    text: a b c
    options: { format_type: wrap, width: 3 }
  - id: stats
    operation: analyze_text
    text: "One. Two!"
"#;

        let batch: BatchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(batch.max_concurrency, Some(2));
        assert_eq!(batch.jobs.len(), 3);
        assert_eq!(batch.jobs[0].options["case_type"], "upper");
        assert_eq!(batch.jobs[1].options["width"], 3);
        assert!(batch.jobs[2].options.is_empty());
        assert!(batch.validate().is_ok());
    }

    #[test]
    fn test_load_and_validate_rejections() {
        struct TestCase {
            name: &'static str,
            yaml: &'static str,
            check: fn(&ConfigError) -> bool,
        }

        let cases = vec![
            TestCase {
                name: "empty batch",
                yaml: "jobs: []\n",
                check: |e| matches!(e, ConfigError::EmptyBatch),
            },
            TestCase {
                name: "duplicate id",
                yaml: "jobs:\n  - {id: a, operation: analyze_text, text: x}\n  - {id: a, operation: analyze_text, text: y}\n",
                check: |e| matches!(e, ConfigError::DuplicateJobId(id) if id == "a"),
            },
            TestCase {
                name: "zero concurrency",
                yaml: "max_concurrency: 0\njobs:\n  - {id: a, operation: analyze_text, text: x}\n",
                check: |e| matches!(e, ConfigError::InvalidConcurrency(0)),
            },
            TestCase {
                name: "missing text",
                yaml: "jobs:\n  - {id: a, operation: analyze_text}\n",
                check: |e| matches!(e, ConfigError::Yaml(_)),
            },
        ];

        for case in cases {
            let file = write_batch(case.yaml);
            let error = load_and_validate_batch(file.path()).unwrap_err();
            assert!((case.check)(&error), "{}: unexpected error {:?}", case.name, error);
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = load_batch("no/such/batch.yaml").unwrap_err();
        assert!(error.to_string().contains("no/such/batch.yaml"));
    }
}
