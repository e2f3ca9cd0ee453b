mod defaults;

use crate::error::ConfigError;
use crate::output::OutputFormat;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Looked for in the working directory when no --config is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-digest.yaml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    /// Include code snippets in the rendered output.
    #[serde(default = "default_true")]
    pub snippets: bool,

    #[serde(default = "default_snippet_lines")]
    pub snippet_lines: usize,

    /// Only keep comments by this author.
    #[serde(default)]
    pub author: Option<String>,

    /// Also fetch top-level review bodies.
    #[serde(default)]
    pub include_reviews: bool,

    /// Strip HTML tags and comments from comment bodies.
    #[serde(default)]
    pub strip_html: bool,

    #[serde(default = "default_gh_binary")]
    pub gh_binary: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            snippets: default_true(),
            snippet_lines: default_snippet_lines(),
            author: None,
            include_reviews: false,
            strip_html: false,
            gh_binary: default_gh_binary(),
        }
    }
}

impl Config {
    /// Load config from a YAML file. An empty file means "all defaults".
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// An explicit path must load; otherwise the default file is used when
    /// present, and built-in defaults when not.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.snippet_lines == 0 {
            return Err(ConfigError::SnippetLines(self.snippet_lines));
        }
        Ok(())
    }
}
