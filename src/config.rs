//! Optional `autodocs.toml` configuration.
//!
//! Every key is optional; command-line flags override file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "autodocs.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root searched for sources when no files are listed.
    pub input_root: PathBuf,
    /// Directory receiving the rendered pages.
    pub output_root: PathBuf,
    /// markdown, md, html or json
    pub format: String,
    /// Extensions collected from `input_root`, without the dot.
    pub extensions: Vec<String>,
    /// Language tag for fenced code blocks.
    pub code_language: String,
    pub check_links: bool,
    pub link_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("samples"),
            output_root: PathBuf::from("docs"),
            format: "markdown".to_string(),
            extensions: vec!["py".to_string()],
            code_language: "python".to_string(),
            check_links: false,
            link_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load from an explicit path, from `autodocs.toml` if present, or
    /// fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = Path::new(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn link_timeout(&self) -> Duration {
        Duration::from_secs(self.link_timeout_secs)
    }
}
