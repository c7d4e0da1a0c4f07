// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Server name reported when no settings file overrides it
pub const DEFAULT_SERVER_NAME: &str = "mcp-production";
/// Prefix prepended to operation names when they are published as tools
pub const DEFAULT_TOOL_PREFIX: &str = "text_";
/// Concurrency used when the host cannot report its parallelism
pub const FALLBACK_CONCURRENCY: usize = 4;

/// Base URL for the local profile
pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
/// Default base URL for the staging profile
pub const STAGING_BASE_URL: &str = "https://api.staging.com";
/// Default base URL for the production profile
pub const PRODUCTION_BASE_URL: &str = "https://api.production.com";

/// Selects the settings profile
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
/// Overrides the profile's log level
pub const ENV_LOG_LEVEL: &str = "SERVER_LOG_LEVEL";
/// Overrides the staging base URL
pub const ENV_STAGING_BASE_URL: &str = "STAGING_BASE_URL";
/// Overrides the production base URL
pub const ENV_PRODUCTION_BASE_URL: &str = "PRODUCTION_BASE_URL";
