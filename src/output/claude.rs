use super::{sort_by_line_then_update, sorted_groups};
use crate::comment::Comment;
use crate::github::PullRequestInfo;

const NO_REVIEW_COMMENTS: &str = "No review comments found on this PR.\n";

/// LLM-oriented markdown: PR header, usage preamble, per-file comment
/// blocks, and a closing instruction section telling the model how to work
/// through the feedback.
pub fn format_claude(
    comments: &[Comment],
    pr: Option<&PullRequestInfo>,
    include_snippet: bool,
    snippet_lines: usize,
) -> String {
    if comments.is_empty() {
        return NO_REVIEW_COMMENTS.to_string();
    }

    let groups = sorted_groups(comments);

    let mut out = String::new();
    out.push_str("# Pull Request Review Comments\n\n");

    if let Some(info) = pr {
        if let Some(title) = &info.title {
            out.push_str(&format!("**PR Title:** {title}\n"));
        }
        if let Some(url) = &info.html_url {
            out.push_str(&format!("**PR URL:** {url}\n"));
        }
    }

    out.push_str(&format!("**Total comments:** {}\n", comments.len()));
    out.push_str(&format!("**Files with comments:** {}\n\n", groups.len()));

    out.push_str("Below are the review comments to address, grouped by file. Each one includes:\n");
    out.push_str("- The file path and line number(s)\n");
    out.push_str("- A code snippet showing the surrounding context\n");
    out.push_str("- The reviewer's feedback\n\n");
    out.push_str("---\n\n");

    for (file, mut bucket) in groups {
        sort_by_line_then_update(&mut bucket);

        out.push_str(&format!("## File: `{file}`\n\n"));

        for comment in bucket {
            out.push_str(&format!("### {}\n\n", comment.line_info()));
            out.push_str(&format!("**Reviewer:** {}\n\n", comment.author));

            if include_snippet {
                let snippet = comment.code_snippet(snippet_lines);
                if !snippet.is_empty() {
                    out.push_str(&format!("**Code context:**\n```\n{snippet}\n```\n\n"));
                }
            }

            out.push_str(&format!("**Review comment:**\n{}\n\n", comment.body));
            if !comment.html_url.is_empty() {
                out.push_str(&format!("[View on GitHub]({})\n\n", comment.html_url));
            }
            out.push_str("---\n\n");
        }
    }

    out.push_str("## Instructions for Addressing Comments\n\n");
    out.push_str("Work through each comment above and make the required code changes. ");
    out.push_str("For each comment, consider:\n\n");
    out.push_str("1. What specific change is the reviewer requesting?\n");
    out.push_str("2. Is the suggestion valid, and should it be implemented?\n");
    out.push_str("3. Are related changes needed elsewhere in the codebase?\n");

    out
}
