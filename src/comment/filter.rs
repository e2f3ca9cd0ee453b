use super::Comment;
use std::collections::HashMap;

/// Keep only comments whose author exactly matches `author` (case-sensitive).
/// A missing or empty target means "no filter".
pub fn filter_by_author(comments: Vec<Comment>, author: Option<&str>) -> Vec<Comment> {
    match author {
        Some(target) if !target.is_empty() => comments
            .into_iter()
            .filter(|c| c.author == target)
            .collect(),
        _ => comments,
    }
}

/// Reduce to one comment per distinct file path: the one with the latest
/// update timestamp. An exact timestamp tie keeps the first-seen comment
/// (replacement only happens on a strictly later update). Output order
/// across files is unspecified; callers re-sort.
pub fn most_recent_per_file(comments: Vec<Comment>) -> Vec<Comment> {
    let mut latest: HashMap<String, Comment> = HashMap::new();

    for comment in comments {
        match latest.get(&comment.file_path) {
            Some(existing) if comment.updated_at <= existing.updated_at => {}
            _ => {
                latest.insert(comment.file_path.clone(), comment);
            }
        }
    }

    latest.into_values().collect()
}

/// Partition comments by file path, preserving input relative order within
/// each bucket. No filtering or sorting.
pub fn group_by_file(comments: &[Comment]) -> HashMap<String, Vec<&Comment>> {
    let mut grouped: HashMap<String, Vec<&Comment>> = HashMap::new();

    for comment in comments {
        grouped
            .entry(comment.file_path.clone())
            .or_default()
            .push(comment);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::test_support::comment;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<Comment> {
        let mut first = comment(1, "a.rs", Some(10), "alice");
        first.updated_at = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let mut second = comment(2, "a.rs", Some(20), "bob");
        second.updated_at = Utc.with_ymd_and_hms(2024, 3, 10, 11, 0, 0).unwrap();
        let mut third = comment(3, "b.rs", Some(5), "alice");
        third.updated_at = Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap();
        vec![first, second, third]
    }

    #[test]
    fn test_filter_by_author_exact_match() {
        let filtered = filter_by_author(sample(), Some("alice"));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.author == "alice"));
    }

    #[test]
    fn test_filter_by_author_is_case_sensitive() {
        let filtered = filter_by_author(sample(), Some("Alice"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_by_author_empty_target_is_identity() {
        let input = sample();
        let expected: Vec<i64> = input.iter().map(|c| c.id).collect();

        let untouched = filter_by_author(input.clone(), Some(""));
        assert_eq!(
            untouched.iter().map(|c| c.id).collect::<Vec<_>>(),
            expected
        );

        let untouched = filter_by_author(input, None);
        assert_eq!(
            untouched.iter().map(|c| c.id).collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_most_recent_per_file_keeps_latest() {
        let reduced = most_recent_per_file(sample());
        assert_eq!(reduced.len(), 2);

        let a = reduced.iter().find(|c| c.file_path == "a.rs").unwrap();
        assert_eq!(a.id, 2);
        let b = reduced.iter().find(|c| c.file_path == "b.rs").unwrap();
        assert_eq!(b.id, 3);
    }

    #[test]
    fn test_most_recent_per_file_tie_keeps_first_seen() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
        let mut first = comment(1, "a.rs", Some(1), "alice");
        first.updated_at = ts;
        let mut second = comment(2, "a.rs", Some(2), "bob");
        second.updated_at = ts;

        let reduced = most_recent_per_file(vec![first, second]);
        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].id, 1);
    }

    #[test]
    fn test_most_recent_per_file_empty() {
        assert!(most_recent_per_file(Vec::new()).is_empty());
    }

    #[test]
    fn test_group_by_file_buckets_and_order() {
        let input = sample();
        let grouped = group_by_file(&input);

        assert_eq!(grouped.len(), 2);
        let a_ids: Vec<i64> = grouped["a.rs"].iter().map(|c| c.id).collect();
        assert_eq!(a_ids, vec![1, 2]);
        assert_eq!(grouped["b.rs"].len(), 1);
    }

    #[test]
    fn test_group_then_flatten_is_order_preserving_permutation() {
        let input = sample();
        let grouped = group_by_file(&input);

        let mut flattened: Vec<i64> = Vec::new();
        for bucket in grouped.values() {
            flattened.extend(bucket.iter().map(|c| c.id));
        }
        flattened.sort_unstable();
        assert_eq!(flattened, vec![1, 2, 3]);

        // Within each bucket the original relative order survives.
        for bucket in grouped.values() {
            let positions: Vec<usize> = bucket
                .iter()
                .map(|c| input.iter().position(|i| i.id == c.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_group_by_file_empty() {
        assert!(group_by_file(&[]).is_empty());
    }
}
