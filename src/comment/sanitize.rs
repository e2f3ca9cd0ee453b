use super::Comment;
use regex::Regex;

/// Strip HTML from every comment body. Review bots wrap payloads in
/// `<details>` blocks and hidden `<!-- -->` markers.
pub fn sanitize_bodies(comments: Vec<Comment>) -> Vec<Comment> {
    comments
        .into_iter()
        .map(|mut c| {
            c.body = strip_html(&c.body);
            c
        })
        .collect()
}

/// Remove HTML comments and tags from `input`, then collapse runs of 3+
/// newlines to 2. Text content between tags is preserved.
pub fn strip_html(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }

    match try_strip(input) {
        Some(stripped) => stripped,
        None => input.to_string(),
    }
}

fn try_strip(input: &str) -> Option<String> {
    let comments = Regex::new(r"(?s)<!--.*?-->").ok()?;
    let tags = Regex::new(r"</?[A-Za-z][^>]*>").ok()?;
    let blank_runs = Regex::new(r"\n{3,}").ok()?;

    let without_comments = comments.replace_all(input, "");
    let without_tags = tags.replace_all(&without_comments, "");
    Some(blank_runs.replace_all(&without_tags, "\n\n").into_owned())
}
