use std::path::PathBuf;

pub fn default_true() -> bool {
    true
}

pub fn default_snippet_lines() -> usize {
    15
}

pub fn default_gh_binary() -> PathBuf {
    PathBuf::from("gh")
}
