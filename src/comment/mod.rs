mod decode;
mod filter;
mod sanitize;

pub use decode::{decode_comments, decode_reviews, parse_timestamp, RawComment, RawReview};
pub use filter::{filter_by_author, group_by_file, most_recent_per_file};
pub use sanitize::sanitize_bodies;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used when the source record carries no file path or author.
pub const UNKNOWN: &str = "unknown";

/// A normalized review comment. Formatters and filters only ever see this
/// shape; all field fallbacks and defaults are resolved at decode time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    pub file_path: String,
    pub line: Option<u32>,
    pub start_line: Option<u32>,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub diff_hunk: String,
    pub html_url: String,
}

impl Comment {
    /// Human-readable line descriptor: "line 42", "lines 45-50", or
    /// "line unknown". A range whose start equals its end collapses to the
    /// single-line form.
    pub fn line_info(&self) -> String {
        match (self.start_line, self.line) {
            (Some(start), Some(end)) if start != end => format!("lines {start}-{end}"),
            (_, Some(line)) => format!("line {line}"),
            _ => "line unknown".to_string(),
        }
    }

    /// Code excerpt from the diff hunk, capped at `max_lines`.
    ///
    /// Drops `@@` header lines and keeps the LAST `max_lines` lines: the
    /// lines nearest the comment anchor sit at the end of a unified-diff
    /// hunk.
    pub fn code_snippet(&self, max_lines: usize) -> String {
        if self.diff_hunk.is_empty() {
            return String::new();
        }

        let lines: Vec<&str> = self
            .diff_hunk
            .lines()
            .filter(|line| !line.starts_with("@@"))
            .collect();

        if lines.len() <= max_lines {
            return lines.join("\n");
        }

        lines[lines.len() - max_lines..].join("\n")
    }
}
