use super::PrLocator;
use crate::comment::{RawComment, RawReview};
use crate::error::GitHubError;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Pull request metadata used by the claude format header.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,
}

/// Thin wrapper around the authenticated `gh` CLI. One blocking invocation
/// per call; no retries, no timeout (a hung fetch is `gh`'s to bound).
pub struct GhClient {
    binary: PathBuf,
}

impl GhClient {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Review comments attached to lines of code.
    ///
    /// Uses: `gh api repos/{owner}/{repo}/pulls/{number}/comments`
    pub fn review_comments(&self, pr: &PrLocator) -> Result<Vec<RawComment>, GitHubError> {
        let endpoint = format!(
            "repos/{}/{}/pulls/{}/comments",
            pr.owner, pr.repo, pr.number
        );
        self.api_decoded(&endpoint)
    }

    /// Top-level review submissions (review bodies not attached to a line).
    ///
    /// Uses: `gh api repos/{owner}/{repo}/pulls/{number}/reviews`
    pub fn pull_reviews(&self, pr: &PrLocator) -> Result<Vec<RawReview>, GitHubError> {
        let endpoint = format!("repos/{}/{}/pulls/{}/reviews", pr.owner, pr.repo, pr.number);
        self.api_decoded(&endpoint)
    }

    /// Pull request metadata (title and permalink).
    ///
    /// Uses: `gh api repos/{owner}/{repo}/pulls/{number}`
    pub fn pull_request(&self, pr: &PrLocator) -> Result<PullRequestInfo, GitHubError> {
        let endpoint = format!("repos/{}/{}/pulls/{}", pr.owner, pr.repo, pr.number);
        self.api_decoded(&endpoint)
    }

    fn api_decoded<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, GitHubError> {
        let payload = self.api(endpoint)?;
        serde_json::from_slice(&payload)
            .map_err(|e| GitHubError::ParseOutput(format!("{endpoint}: {e}")))
    }

    fn api(&self, endpoint: &str) -> Result<Vec<u8>, GitHubError> {
        debug!("Running {:?} api {}", self.binary, endpoint);

        let output = Command::new(&self.binary)
            .args(["api", endpoint])
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitHubError::GhNotFound
                } else {
                    GitHubError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitHubError::GhCli(stderr.trim().to_string()));
        }

        Ok(output.stdout)
    }
}
