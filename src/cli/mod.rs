pub mod comments;

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pr-digest")]
#[command(
    author,
    version,
    about = "Fetch GitHub PR review comments and render them for LLM consumption"
)]
pub struct Cli {
    /// PR reference: https://github.com/owner/repo/pull/123 or owner/repo#123
    #[arg(value_name = "PR")]
    pub pr: Option<String>,

    /// Repository owner
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Repository name
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(short = 'n', long = "pr-number")]
    pub pr_number: Option<u32>,

    /// Only keep comments by this author (exact match)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Keep only the most recently updated comment per file
    #[arg(short, long)]
    pub most_recent: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Exclude code snippets from the output
    #[arg(long)]
    pub no_snippet: bool,

    /// Max lines per code snippet
    #[arg(long)]
    pub snippet_lines: Option<usize>,

    /// Also include top-level review bodies
    #[arg(long)]
    pub include_reviews: bool,

    /// Strip HTML tags and comments from comment bodies
    #[arg(long)]
    pub strip_html: bool,

    /// Write the output to this file instead of stdout
    #[arg(short = 'O', long)]
    pub output: Option<PathBuf>,

    /// Config file (default: .pr-digest.yaml if present)
    #[arg(short, long, env = "PR_DIGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_unset() {
        let cli = Cli::parse_from(["pr-digest", "owner/repo#1"]);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["pr-digest", "owner/repo#1", "-f", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_filter_flags() {
        let cli = Cli::parse_from(["pr-digest", "owner/repo#1", "-a", "alice", "--most-recent"]);
        assert_eq!(cli.author.as_deref(), Some("alice"));
        assert!(cli.most_recent);
    }

    #[test]
    fn test_snippet_flags() {
        let cli = Cli::parse_from(["pr-digest", "owner/repo#1", "--no-snippet"]);
        assert!(cli.no_snippet);
        assert_eq!(cli.snippet_lines, None);

        let cli = Cli::parse_from(["pr-digest", "owner/repo#1", "--snippet-lines", "25"]);
        assert_eq!(cli.snippet_lines, Some(25));
    }

    #[test]
    fn test_explicit_coordinates() {
        let cli = Cli::parse_from(["pr-digest", "-o", "owner", "-r", "repo", "-n", "42"]);
        assert_eq!(cli.owner.as_deref(), Some("owner"));
        assert_eq!(cli.repo.as_deref(), Some("repo"));
        assert_eq!(cli.pr_number, Some(42));
    }

    #[test]
    fn test_output_path_flag() {
        let cli = Cli::parse_from(["pr-digest", "owner/repo#1", "-O", "digest.md"]);
        assert_eq!(cli.output, Some(PathBuf::from("digest.md")));
    }
}
