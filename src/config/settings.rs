// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::consts::{
    DEFAULT_SERVER_NAME, DEFAULT_TOOL_PREFIX, ENV_ENVIRONMENT, ENV_LOG_LEVEL,
    ENV_PRODUCTION_BASE_URL, ENV_STAGING_BASE_URL, FALLBACK_CONCURRENCY, LOCAL_BASE_URL,
    PRODUCTION_BASE_URL, STAGING_BASE_URL,
};
use crate::errors::ConfigError;

/// Deployment profile. Each profile supplies its own debug flag, log level and
/// base URL defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(value.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    fn default_debug(&self) -> bool {
        !matches!(self, Environment::Production)
    }

    fn default_log_level(&self) -> LogLevel {
        match self {
            Environment::Local => LogLevel::Debug,
            Environment::Staging => LogLevel::Info,
            Environment::Production => LogLevel::Warn,
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_BASE_URL,
            Environment::Staging => STAGING_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Profile-specific environment variable that replaces the base URL.
    fn base_url_variable(&self) -> Option<&'static str> {
        match self {
            Environment::Local => None,
            Environment::Staging => Some(ENV_STAGING_BASE_URL),
            Environment::Production => Some(ENV_PRODUCTION_BASE_URL),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Accepts any ASCII case, plus `warning` as a synonym for `warn`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(value.to_string())),
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

/// Settings as written in a YAML file. Every field is optional.
///
/// # Example
/// ```yaml
/// environment: staging
/// server_name: mcp-production
/// transport: stdio
/// log_level: info
/// tool_prefix: text_
/// max_concurrency: 4
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub environment: Option<String>,
    pub debug: Option<bool>,
    pub base_url: Option<String>,
    pub server_name: Option<String>,
    pub server_version: Option<String>,
    pub transport: Option<Transport>,
    pub log_level: Option<String>,
    pub tool_prefix: Option<String>,
    pub max_concurrency: Option<usize>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub environment: Environment,
    pub debug: bool,
    pub base_url: String,
    pub server_name: String,
    pub server_version: String,
    pub transport: Transport,
    pub log_level: LogLevel,
    pub tool_prefix: String,
    /// `None` means one job per available core.
    pub max_concurrency: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::profile(Environment::default())
    }
}

impl Settings {
    /// Defaults for `environment` with nothing overridden.
    pub fn profile(environment: Environment) -> Self {
        Self {
            environment,
            debug: environment.default_debug(),
            base_url: environment.default_base_url().to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            transport: Transport::default(),
            log_level: environment.default_log_level(),
            tool_prefix: DEFAULT_TOOL_PREFIX.to_string(),
            max_concurrency: None,
        }
    }

    /// Layer profile defaults, then `file`, then environment variables.
    pub fn resolve(file: SettingsFile, env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let environment = match env.get(ENV_ENVIRONMENT).or(file.environment.as_ref()) {
            Some(value) => Environment::parse(value)?,
            None => Environment::default(),
        };

        let mut settings = Self::profile(environment);

        if let Some(value) = env.get(ENV_LOG_LEVEL).or(file.log_level.as_ref()) {
            settings.log_level = LogLevel::parse(value)?;
        }

        let base_url_override = environment
            .base_url_variable()
            .and_then(|name| env.get(name).cloned());
        if let Some(base_url) = base_url_override.or(file.base_url) {
            settings.base_url = base_url;
        }

        if let Some(limit) = file.max_concurrency {
            if limit == 0 {
                return Err(ConfigError::InvalidConcurrency(limit));
            }
            settings.max_concurrency = Some(limit);
        }

        if let Some(debug) = file.debug {
            settings.debug = debug;
        }
        if let Some(server_name) = file.server_name {
            settings.server_name = server_name;
        }
        if let Some(server_version) = file.server_version {
            settings.server_version = server_version;
        }
        if let Some(transport) = file.transport {
            settings.transport = transport;
        }
        if let Some(tool_prefix) = file.tool_prefix {
            settings.tool_prefix = tool_prefix;
        }

        Ok(settings)
    }

    /// Resolve from environment variables alone.
    pub fn from_env_map(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::resolve(SettingsFile::default(), env)
    }

    /// Effective concurrency limit for batch execution.
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_CONCURRENCY)
        })
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document is a valid "use the defaults" file.
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }

    Ok(serde_yaml::from_str(&content)?)
}

/// Load settings from an optional YAML file and the process environment.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => read_settings_file(path)?,
        None => SettingsFile::default(),
    };
    let env: HashMap<String, String> = std::env::vars().collect();
    Settings::resolve(file, &env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_profile_defaults() {
        struct TestCase {
            environment: &'static str,
            debug: bool,
            log_level: LogLevel,
            base_url: &'static str,
        }

        let cases = vec![
            TestCase {
                environment: "local",
                debug: true,
                log_level: LogLevel::Debug,
                base_url: "http://localhost:8000",
            },
            TestCase {
                environment: "staging",
                debug: true,
                log_level: LogLevel::Info,
                base_url: "https://api.staging.com",
            },
            TestCase {
                environment: "production",
                debug: false,
                log_level: LogLevel::Warn,
                base_url: "https://api.production.com",
            },
        ];

        for case in cases {
            let settings = Settings::from_env_map(&env(&[("ENVIRONMENT", case.environment)])).unwrap();
            assert_eq!(settings.environment.as_str(), case.environment);
            assert_eq!(settings.debug, case.debug, "debug for {}", case.environment);
            assert_eq!(settings.log_level, case.log_level, "log level for {}", case.environment);
            assert_eq!(settings.base_url, case.base_url);
            assert_eq!(settings.server_name, "mcp-production");
            assert_eq!(settings.tool_prefix, "text_");
            assert_eq!(settings.transport, Transport::Stdio);
        }
    }

    #[test]
    fn test_missing_environment_defaults_to_local() {
        let settings = Settings::from_env_map(&HashMap::new()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn test_environment_variable_overrides() {
        let settings = Settings::from_env_map(&env(&[
            ("ENVIRONMENT", "production"),
            ("SERVER_LOG_LEVEL", "WARNING"),
            ("PRODUCTION_BASE_URL", "https://text.example.com"),
            ("STAGING_BASE_URL", "https://ignored.example.com"),
        ]))
        .unwrap();

        assert_eq!(settings.log_level, LogLevel::Warn);
        assert_eq!(settings.base_url, "https://text.example.com");

        let settings = Settings::from_env_map(&env(&[
            ("ENVIRONMENT", "Staging"),
            ("SERVER_LOG_LEVEL", "trace"),
            ("STAGING_BASE_URL", "https://staging.example.com"),
        ]))
        .unwrap();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.log_level, LogLevel::Trace);
        assert_eq!(settings.base_url, "https://staging.example.com");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = Settings::from_env_map(&env(&[("ENVIRONMENT", "qa")]));
        assert!(matches!(result, Err(ConfigError::UnknownEnvironment(ref e)) if e == "qa"));

        let result = Settings::from_env_map(&env(&[("SERVER_LOG_LEVEL", "loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidLogLevel(ref l)) if l == "loud"));

        let file = SettingsFile {
            max_concurrency: Some(0),
            ..SettingsFile::default()
        };
        let result = Settings::resolve(file, &HashMap::new());
        assert!(matches!(result, Err(ConfigError::InvalidConcurrency(0))));
    }

    #[test]
    fn test_file_values_then_environment() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "environment: staging\nserver_name: words\ntransport: http\nlog_level: error\nmax_concurrency: 3"
        )
        .unwrap();

        let parsed = read_settings_file(file.path()).unwrap();
        let settings = Settings::resolve(parsed, &env(&[("SERVER_LOG_LEVEL", "debug")])).unwrap();

        assert_eq!(settings.environment, Environment::Staging);
        assert_eq!(settings.server_name, "words");
        assert_eq!(settings.transport, Transport::Http);
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.max_concurrency, Some(3));
        assert_eq!(settings.max_concurrency(), 3);
    }

    #[test]
    fn test_read_settings_file_errors() {
        let missing = read_settings_file(Path::new("does/not/exist.yaml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "unexpected_key: 1").unwrap();
        assert!(matches!(read_settings_file(file.path()), Err(ConfigError::Yaml(_))));

        let empty = NamedTempFile::new().unwrap();
        let parsed = read_settings_file(empty.path()).unwrap();
        assert!(parsed.environment.is_none());
    }

    #[test]
    fn test_default_concurrency_is_positive() {
        assert!(Settings::default().max_concurrency() >= 1);
    }
}
