use super::{Comment, UNKNOWN};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One review comment as the GitHub API ships it. Only the fields the
/// pipeline consumes are declared; everything is defaulted so a sparse
/// record still decodes.
#[derive(Debug, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub line: Option<u32>,

    #[serde(default)]
    pub original_line: Option<u32>,

    #[serde(default)]
    pub start_line: Option<u32>,

    #[serde(default)]
    pub original_start_line: Option<u32>,

    #[serde(default)]
    pub user: Option<RawUser>,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,

    #[serde(default)]
    pub diff_hunk: String,

    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub login: Option<String>,
}

/// A top-level review submission (a review body not attached to a line).
#[derive(Debug, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub id: i64,

    #[serde(default)]
    pub user: Option<RawUser>,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub submitted_at: String,

    #[serde(default)]
    pub html_url: String,
}

/// Parse an RFC-3339 timestamp, degrading to the Unix epoch on failure.
///
/// The degradation is silent by contract: a malformed timestamp must not
/// abort the pipeline.
pub fn parse_timestamp(value: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            tracing::debug!("Unparseable timestamp '{}', using epoch: {}", value, e);
            DateTime::UNIX_EPOCH
        }
    }
}

fn non_empty_or_unknown(value: Option<String>) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => UNKNOWN.to_string(),
    }
}

fn login_or_unknown(user: Option<RawUser>) -> String {
    non_empty_or_unknown(user.and_then(|u| u.login))
}

fn decode_comment(raw: RawComment) -> Comment {
    Comment {
        id: raw.id,
        file_path: non_empty_or_unknown(raw.path),
        // Line and range-start fall back to their "original" counterparts
        // independently of each other.
        line: raw.line.or(raw.original_line),
        start_line: raw.start_line.or(raw.original_start_line),
        author: login_or_unknown(raw.user),
        body: raw.body,
        created_at: parse_timestamp(&raw.created_at),
        updated_at: parse_timestamp(&raw.updated_at),
        diff_hunk: raw.diff_hunk,
        html_url: raw.html_url,
    }
}

/// Normalize a fetched batch, preserving input order. Never fails: malformed
/// timestamps degrade per [`parse_timestamp`], missing strings get the
/// `"unknown"` sentinel.
pub fn decode_comments(raw: Vec<RawComment>) -> Vec<Comment> {
    raw.into_iter().map(decode_comment).collect()
}

fn decode_review(raw: RawReview) -> Option<Comment> {
    if raw.body.trim().is_empty() {
        return None;
    }

    let submitted_at = parse_timestamp(&raw.submitted_at);
    Some(Comment {
        id: raw.id,
        file_path: UNKNOWN.to_string(),
        line: None,
        start_line: None,
        author: login_or_unknown(raw.user),
        body: raw.body,
        created_at: submitted_at,
        updated_at: submitted_at,
        diff_hunk: String::new(),
        html_url: raw.html_url,
    })
}

/// Normalize review submissions. Blank-bodied reviews (approvals without a
/// comment) are dropped; survivors keep their input order.
pub fn decode_reviews(raw: Vec<RawReview>) -> Vec<Comment> {
    raw.into_iter().filter_map(decode_review).collect()
}
