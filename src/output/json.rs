use crate::comment::Comment;
use serde::Serialize;

/// The wire shape downstream tools parse. Field set and names are a stable
/// contract: file, line, author, body, snippet, url.
#[derive(Serialize)]
struct JsonComment<'a> {
    file: &'a str,
    line: Option<u32>,
    author: &'a str,
    body: &'a str,
    snippet: Option<String>,
    url: &'a str,
}

/// Pretty-printed JSON array, one object per comment, input order preserved.
/// `snippet` is null unless snippets are enabled and the extraction is
/// non-empty.
pub fn format_json(comments: &[Comment], include_snippet: bool, snippet_lines: usize) -> String {
    let entries: Vec<JsonComment> = comments
        .iter()
        .map(|c| {
            let snippet = if include_snippet {
                let extracted = c.code_snippet(snippet_lines);
                (!extracted.is_empty()).then_some(extracted)
            } else {
                None
            };

            JsonComment {
                file: &c.file_path,
                line: c.line,
                author: &c.author,
                body: &c.body,
                snippet,
                url: &c.html_url,
            }
        })
        .collect();

    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}
