// Configuration source loading.
//
// Priority order:
// 1. Environment variables (OC2OTEL_* prefix)
// 2. Config file path from OC2OTEL_CONFIG
// 3. Inline config content from OC2OTEL_CONFIG_CONTENT
// 4. Default config files (./config.toml, ./.oc2otel.toml)
// 5. Built-in defaults

use crate::env_overrides::{EnvSource, ENV_PREFIX};
use crate::*;
use anyhow::{Context, Result};
use std::env;
use std::path::Path;

const DEFAULT_CONFIG_FILES: &[&str] = &["./config.toml", "./.oc2otel.toml"];

/// Load configuration using the process environment and working directory.
pub fn load_config() -> Result<RuntimeConfig> {
    let env_source = StdEnvSource;
    let mut config = RuntimeConfig::default();

    if let Some(file_config) = load_from_file(&env_source)? {
        config.merge(file_config);
    }

    config.apply_env_overrides_from(&env_source)?;
    config.validate()?;
    Ok(config)
}

fn load_from_file<E: EnvSource>(env: &E) -> Result<Option<RuntimeConfig>> {
    if let Some(path) = env.get("CONFIG") {
        return read_config_file(Path::new(&path)).map(Some);
    }

    if let Some(content) = env.get("CONFIG_CONTENT") {
        let config: RuntimeConfig = toml::from_str(&content)
            .context("Failed to parse inline config from OC2OTEL_CONFIG_CONTENT")?;
        return Ok(Some(config));
    }

    for path in DEFAULT_CONFIG_FILES {
        let path = Path::new(path);
        if path.exists() {
            return read_config_file(path).map(Some);
        }
    }

    Ok(None)
}

fn read_config_file(path: &Path) -> Result<RuntimeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from a specific file path (for CLI --config flag).
/// Returns error if file doesn't exist or can't be parsed.
pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<RuntimeConfig> {
    let mut config = RuntimeConfig::default();
    config.merge(read_config_file(path.as_ref())?);

    config.apply_env_overrides_from(&StdEnvSource)?;
    config.validate()?;
    Ok(config)
}

/// Build a configuration from inline TOML and a custom environment source.
pub fn load_with_env<E: EnvSource>(inline_config: Option<&str>, env: &E) -> Result<RuntimeConfig> {
    let mut config = RuntimeConfig::default();

    if let Some(inline) = inline_config {
        let file_config: RuntimeConfig =
            toml::from_str(inline).context("Failed to parse inline config content")?;
        config.merge(file_config);
    }

    config.apply_env_overrides_from(env)?;
    config.validate()?;
    Ok(config)
}

struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", ENV_PREFIX, key)).ok()
    }
}
