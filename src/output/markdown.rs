use super::{sort_by_line_then_update, sorted_groups, NO_COMMENTS};
use crate::comment::Comment;

/// One markdown block per comment: header, author, update date, optional
/// fenced snippet, full body.
fn comment_block(comment: &Comment, include_snippet: bool, snippet_lines: usize) -> String {
    let mut block = String::new();

    block.push_str(&format!(
        "### {} ({})\n\n",
        comment.file_path,
        comment.line_info()
    ));
    block.push_str(&format!("**Author:** {}\n", comment.author));
    block.push_str(&format!(
        "**Date:** {}\n\n",
        comment.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if include_snippet {
        let snippet = comment.code_snippet(snippet_lines);
        if !snippet.is_empty() {
            block.push_str(&format!("**Code context:**\n```\n{snippet}\n```\n\n"));
        }
    }

    block.push_str(&format!("**Comment:**\n{}\n", comment.body));
    block
}

/// Markdown document grouped by file: files in lexical order, comments
/// within a file by line then update time.
pub fn format_grouped(comments: &[Comment], include_snippet: bool, snippet_lines: usize) -> String {
    if comments.is_empty() {
        return NO_COMMENTS.to_string();
    }

    let groups = sorted_groups(comments);

    let mut out = String::new();
    out.push_str("# PR Review Comments\n\n");
    out.push_str(&format!("**Total comments:** {}\n", comments.len()));
    out.push_str(&format!("**Files with comments:** {}\n\n", groups.len()));

    for (file, mut bucket) in groups {
        sort_by_line_then_update(&mut bucket);

        out.push_str(&format!("## {file}\n\n"));
        out.push_str(&format!("({} comment(s))\n\n", bucket.len()));

        for comment in bucket {
            out.push_str(&comment_block(comment, include_snippet, snippet_lines));
            out.push_str("\n---\n\n");
        }
    }

    out
}

/// Flat markdown list, most recently updated first.
pub fn format_flat(comments: &[Comment], include_snippet: bool, snippet_lines: usize) -> String {
    if comments.is_empty() {
        return NO_COMMENTS.to_string();
    }

    let mut out = String::new();
    out.push_str("# PR Review Comments\n\n");
    out.push_str(&format!("**Total comments:** {}\n\n", comments.len()));

    let mut sorted: Vec<&Comment> = comments.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    for (i, comment) in sorted.iter().enumerate() {
        out.push_str(&format!("## Comment {}\n\n", i + 1));
        out.push_str(&comment_block(comment, include_snippet, snippet_lines));
        out.push_str("\n---\n\n");
    }

    out
}
