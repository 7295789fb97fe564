//! Plugin config loader (strict parsing).

pub mod schema;

use std::fs;

use evsifter_core::error::{Result, SiftError};

pub use schema::{KindClass, PluginConfig, RuleConfig, SifterConfig};

pub fn load_from_file(path: &str) -> Result<PluginConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SiftError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PluginConfig> {
    let cfg: PluginConfig = serde_yaml::from_str(s)
        .map_err(|e| SiftError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
