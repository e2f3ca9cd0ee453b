mod claude;
mod compact;
mod json;
mod markdown;

use crate::comment::{group_by_file, Comment};
use crate::error::OutputError;
use crate::github::PullRequestInfo;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub(crate) const NO_COMMENTS: &str = "No comments found.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Claude/LLM-optimized markdown (default)
    #[default]
    Claude,
    /// Markdown grouped by file
    Grouped,
    /// Flat markdown list, most recently updated first
    Flat,
    /// Compact one-line-per-comment digest
    Minimal,
    /// JSON array for programmatic use
    Json,
}

/// Render the selected format. Input is never mutated; formatters that sort
/// do so on copies.
pub fn render(
    format: OutputFormat,
    comments: &[Comment],
    pr: Option<&PullRequestInfo>,
    include_snippet: bool,
    snippet_lines: usize,
) -> String {
    match format {
        OutputFormat::Claude => claude::format_claude(comments, pr, include_snippet, snippet_lines),
        OutputFormat::Grouped => markdown::format_grouped(comments, include_snippet, snippet_lines),
        OutputFormat::Flat => markdown::format_flat(comments, include_snippet, snippet_lines),
        OutputFormat::Minimal => compact::format_minimal(comments),
        OutputFormat::Json => json::format_json(comments, include_snippet, snippet_lines),
    }
}

/// Write the payload verbatim to `path`, or print it when no path is given.
/// The "written to" notice goes to stderr so stdout stays clean for piping.
pub fn write_payload(path: Option<&Path>, payload: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => {
            fs::write(path, payload).map_err(|source| OutputError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            eprintln!("Output written to {}", path.display());
            Ok(())
        }
        None => {
            print!("{payload}");
            Ok(())
        }
    }
}

/// File buckets in lexical path order, for the formatters that group.
pub(crate) fn sorted_groups(comments: &[Comment]) -> Vec<(String, Vec<&Comment>)> {
    let mut groups: Vec<(String, Vec<&Comment>)> = group_by_file(comments).into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}

/// In-file ordering shared by the grouped and claude formats: line number
/// ascending (unknown lines first), update time as the tie-break.
pub(crate) fn sort_by_line_then_update(bucket: &mut [&Comment]) {
    bucket.sort_by(|a, b| {
        a.line
            .cmp(&b.line)
            .then_with(|| a.updated_at.cmp(&b.updated_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::test_support::comment;

    #[test]
    fn test_every_empty_variant() {
        let none: Vec<Comment> = Vec::new();
        assert_eq!(
            render(OutputFormat::Grouped, &none, None, true, 10),
            "No comments found.\n"
        );
        assert_eq!(
            render(OutputFormat::Flat, &none, None, true, 10),
            "No comments found.\n"
        );
        assert_eq!(
            render(OutputFormat::Minimal, &none, None, true, 10),
            "No comments found.\n"
        );
        assert_eq!(
            render(OutputFormat::Claude, &none, None, true, 10),
            "No review comments found on this PR.\n"
        );
        assert_eq!(render(OutputFormat::Json, &none, None, true, 10), "[]");
    }

    #[test]
    fn test_render_does_not_reorder_input() {
        let input = vec![
            comment(2, "b.rs", Some(5), "bob"),
            comment(1, "a.rs", Some(1), "alice"),
        ];
        let before: Vec<i64> = input.iter().map(|c| c.id).collect();
        render(OutputFormat::Grouped, &input, None, true, 10);
        let after: Vec<i64> = input.iter().map(|c| c.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sorted_groups_lexical_order() {
        let input = vec![
            comment(1, "zeta.rs", Some(1), "alice"),
            comment(2, "alpha.rs", Some(1), "alice"),
        ];
        let groups = sorted_groups(&input);
        let names: Vec<&str> = groups.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(names, vec!["alpha.rs", "zeta.rs"]);
    }

    #[test]
    fn test_write_payload_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        write_payload(Some(&path), "payload\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "payload\n");
    }

    #[test]
    fn test_write_payload_bad_path_is_terminal() {
        let err = write_payload(Some(Path::new("/nonexistent-dir/out.md")), "x").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/out.md"));
    }
}
