//! Configuration loading

use std::path::Path;

use consortium_types::{ConsortiumConfig, ConsortiumError, ConsortiumResult};
use tracing::debug;

/// Load a consortium configuration from a TOML file
///
/// A missing file yields the defaults. Whatever is loaded is validated.
pub fn load_config(path: impl AsRef<Path>) -> ConsortiumResult<ConsortiumConfig> {
    let path = path.as_ref();

    let config = if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConsortiumError::InvalidConfig(format!("{}: {e}", path.display())))?;
        parse_config(&contents)?
    } else {
        debug!(path = %path.display(), "Config file not found, using defaults");
        ConsortiumConfig::default()
    };

    config.validate()?;
    Ok(config)
}

/// Parse a configuration from TOML text
pub fn parse_config(contents: &str) -> ConsortiumResult<ConsortiumConfig> {
    toml::from_str(contents).map_err(|e| ConsortiumError::InvalidConfig(e.to_string()))
}
