use super::{sorted_groups, NO_COMMENTS};
use crate::comment::Comment;

const PREVIEW_CHARS: usize = 100;

/// Compact digest: one summary line, then a path line per file and a
/// one-liner per comment.
pub fn format_minimal(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return NO_COMMENTS.to_string();
    }

    let groups = sorted_groups(comments);

    let mut out = String::new();
    out.push_str(&format!(
        "PR Comments: {} total across {} file(s)\n\n",
        comments.len(),
        groups.len()
    ));

    for (file, mut bucket) in groups {
        out.push_str(&format!("\u{1F4C4} {file}\n"));

        bucket.sort_by_key(|c| c.line);
        for comment in bucket {
            out.push_str(&format!(
                "  \u{2514}\u{2500} {} ({}): {}\n",
                comment.line_info(),
                comment.author,
                preview(&comment.body)
            ));
        }

        out.push('\n');
    }

    out
}

/// Flatten newlines to spaces, then cap at 100 characters with a "..."
/// marker. Counted in chars, not bytes.
fn preview(body: &str) -> String {
    let flattened = body.replace('\n', " ");
    let truncated: String = flattened.chars().take(PREVIEW_CHARS).collect();
    if flattened.chars().count() > PREVIEW_CHARS {
        format!("{truncated}...")
    } else {
        truncated
    }
}
