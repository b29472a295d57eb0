// Configuration validation
//
// Rejects values the tool cannot run with and warns about risky ones

use crate::*;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &RuntimeConfig) -> Result<()> {
    validate_input_config(&config.input)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<()> {
    if config.max_payload_bytes == 0 {
        bail!("input.max_payload_bytes must be greater than 0");
    }

    // Warn about very large payloads
    if config.max_payload_bytes > 100 * 1024 * 1024 {
        // 100 MB
        warn!(
            max_payload_bytes = config.max_payload_bytes,
            "input.max_payload_bytes is very large; may cause memory issues"
        );
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    if config.level.trim().is_empty() {
        bail!("logging.level must not be empty");
    }

    Ok(())
}
