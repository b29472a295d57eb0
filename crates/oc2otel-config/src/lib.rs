// oc2otel-config - Configuration for the oc2otel command line tool
//
// Supports configuration from multiple sources:
// 1. Environment variables (highest priority)
// 2. Config file path from OC2OTEL_CONFIG env var
// 3. Config file contents from OC2OTEL_CONFIG_CONTENT env var
// 4. Default config file locations (./config.toml, ./.oc2otel.toml)
// 5. Built-in defaults (lowest priority)
//
// Command line flags are applied on top by the binary.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, ENV_PREFIX};

/// Main runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How payloads are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub format: FormatSetting,
    pub max_payload_bytes: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: FormatSetting::Auto,
            max_payload_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Payload format selection. `Auto` resolves from the file extension, then
/// from the payload bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    #[default]
    Auto,
    Protobuf,
    Json,
    Jsonl,
}

impl fmt::Display for FormatSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSetting::Auto => write!(f, "auto"),
            FormatSetting::Protobuf => write!(f, "protobuf"),
            FormatSetting::Json => write!(f, "json"),
            FormatSetting::Jsonl => write!(f, "jsonl"),
        }
    }
}

impl FromStr for FormatSetting {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(FormatSetting::Auto),
            "protobuf" | "proto" | "pb" => Ok(FormatSetting::Protobuf),
            "json" => Ok(FormatSetting::Json),
            "jsonl" | "ndjson" => Ok(FormatSetting::Jsonl),
            _ => anyhow::bail!(
                "Unsupported input format: {}. Supported: auto, protobuf, json, jsonl",
                s
            ),
        }
    }
}

/// How translated metrics are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// Log filter and output shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Unsupported log format: {}. Supported: text, json", s),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from all sources with priority
    pub fn load() -> Result<Self> {
        sources::load_config()
    }

    /// Load configuration from an explicit file (CLI --config flag), then
    /// apply environment overrides.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Build a configuration from optional inline TOML plus overrides supplied
    /// by an `EnvSource`.
    pub fn load_with_env<E: EnvSource>(inline_config: Option<&str>, env: &E) -> Result<Self> {
        sources::load_with_env(inline_config, env)
    }

    /// Replace every section with the one from `other`.
    ///
    /// Sections missing from a config file deserialize to their defaults, so a
    /// parsed file is always complete.
    pub fn merge(&mut self, other: RuntimeConfig) {
        self.input = other.input;
        self.output = other.output;
        self.logging = other.logging;
    }

    /// Apply environment overrides from a custom source.
    pub fn apply_env_overrides_from<E: EnvSource>(&mut self, env: &E) -> Result<()> {
        env_overrides::apply_env_overrides(self, env)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}
