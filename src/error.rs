use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("snippet_lines must be at least 1 (got {0})")]
    SnippetLines(usize),
}

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error(
        "Cannot parse PR reference '{0}': expected https://github.com/owner/repo/pull/N or owner/repo#N"
    )]
    Unrecognized(String),

    #[error("Invalid PR number '{0}'")]
    InvalidNumber(String),

    #[error("No pull request given: pass a PR reference or --owner, --repo, and --pr-number")]
    Missing,
}

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("gh CLI failed: {0}")]
    GhCli(String),

    #[error("gh CLI not found. Install it from https://cli.github.com/ and run `gh auth login`")]
    GhNotFound,

    #[error("Failed to parse gh output: {0}")]
    ParseOutput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output to '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
