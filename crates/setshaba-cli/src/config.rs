//! User-level CLI configuration.
//!
//! A small optional TOML file sets the default output mode; the `--json`
//! flag and the `SETSHABA_FORMAT` env var override it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::output::OutputMode;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserConfig {
    #[serde(default)]
    pub output: Option<String>,
}

pub fn load_user_config() -> Result<UserConfig> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(UserConfig::default());
    };
    load_user_config_from(&config_dir.join("setshaba/config.toml"))
}

pub fn load_user_config_from(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<UserConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve the output mode. Precedence (highest wins): `--json` flag,
/// `SETSHABA_FORMAT` env var, user config, then human output.
pub fn resolve_output(
    cli_json: bool,
    user_output: Option<String>,
    env_format: Option<String>,
) -> OutputMode {
    fn normalize_output_mode(raw: &str) -> Option<OutputMode> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputMode::Json),
            "human" | "text" | "pretty" => Some(OutputMode::Human),
            _ => None,
        }
    }

    if cli_json {
        return OutputMode::Json;
    }

    if let Some(mode) = env_format.as_deref().and_then(normalize_output_mode) {
        return mode;
    }

    if let Some(mode) = user_output.as_deref().and_then(normalize_output_mode) {
        return mode;
    }

    OutputMode::Human
}

#[cfg(test)]
mod tests {
    use super::{load_user_config_from, resolve_output};
    use crate::output::OutputMode;

    #[test]
    fn cli_json_overrides_env_and_config() {
        let mode = resolve_output(true, Some("human".to_string()), Some("human".to_string()));
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn env_overrides_user_config() {
        let mode = resolve_output(false, Some("human".to_string()), Some("json".to_string()));
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn unknown_tokens_fall_through() {
        let mode = resolve_output(false, Some("yaml".to_string()), Some("csv".to_string()));
        assert_eq!(mode, OutputMode::Human);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = load_user_config_from(&dir.path().join("config.toml")).expect("load");
        assert!(cfg.output.is_none());
    }

    #[test]
    fn config_file_sets_default_output() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = \"json\"\n").expect("write config");

        let cfg = load_user_config_from(&path).expect("load");
        assert_eq!(cfg.output, Some("json".to_string()));
        assert_eq!(resolve_output(false, cfg.output, None), OutputMode::Json);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output = [not toml").expect("write config");
        assert!(load_user_config_from(&path).is_err());
    }
}
