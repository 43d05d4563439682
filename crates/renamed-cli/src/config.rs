use anyhow::{Context, Result};
use renamed::DEFAULT_DOMAIN;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const CONFIG_FILENAME: &str = ".renamed.toml";

/// How expanded shims are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Swift,
    Sexp,
    Json,
}

/// Application configuration with layered defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Format used by `expand` when no --format is given
    pub output_format: OutputFormat,

    /// Indentation of the S-expression printer
    pub indent: usize,

    /// Domain reported with every diagnostic
    pub diagnostic_domain: String,

    /// Whether to color terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Swift,
            indent: 2,
            diagnostic_domain: DEFAULT_DOMAIN.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration: defaults, then the config file.
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        let file_config = match explicit {
            Some(path) => Some(Self::load_from_file(path)?),
            None => {
                let path = PathBuf::from(CONFIG_FILENAME);
                if path.exists() {
                    Some(Self::load_from_file(&path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file_config) = file_config {
            config.merge(file_config);
        }

        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.output_format {
            self.output_format = val;
        }
        if let Some(val) = other.indent {
            self.indent = val;
        }
        if let Some(val) = other.diagnostic_domain {
            self.diagnostic_domain = val;
        }
        if let Some(val) = other.color {
            self.color = val;
        }
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    output_format: Option<OutputFormat>,
    indent: Option<usize>,
    diagnostic_domain: Option<String>,
    color: Option<bool>,
}
