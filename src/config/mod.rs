use anyhow::{Context, Result};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: String,
    pub model: String,
    pub api_base: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            model: "gemini-2.5-flash".into(),
            api_base: "https://generativelanguage.googleapis.com".into(),
            temperature: 0.7,
            timeout_secs: 300,
            out_dir: ".".into(),
        }
    }
}

impl Config {
    /// Loads a TOML config file. Missing keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let cfg = toml::from_str(&raw)
            .with_context(|| format!("cannot parse config {}", path.display()))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("giaoan.toml");
        fs::write(&path, "model = \"gemini-2.0-pro\"\ntimeout_secs = 60\n").unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.model, "gemini-2.0-pro");
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.temperature, 0.7);
        assert_eq!(cfg.api_base, "https://generativelanguage.googleapis.com");
    }
}
