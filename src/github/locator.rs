use crate::error::LocatorError;
use std::fmt;
use std::str::FromStr;

/// A pull request reference: owner, repository, and PR number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrLocator {
    pub owner: String,
    pub repo: String,
    pub number: u32,
}

impl PrLocator {
    /// Parse either accepted shape:
    /// `https://github.com/{owner}/{repo}/pull/{number}` (optional trailing
    /// slash, http or https) or `{owner}/{repo}#{number}`. Anything else is
    /// rejected, including github.com URLs whose path is not a `pull` path.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let trimmed = input.trim().trim_end_matches('/');

        if let Some(path) = trimmed
            .strip_prefix("https://github.com/")
            .or_else(|| trimmed.strip_prefix("http://github.com/"))
        {
            return Self::parse_url_path(path, input);
        }

        Self::parse_shorthand(trimmed, input)
    }

    fn parse_url_path(path: &str, original: &str) -> Result<Self, LocatorError> {
        let parts: Vec<&str> = path.split('/').collect();
        let &[owner, repo, kind, number] = parts.as_slice() else {
            return Err(LocatorError::Unrecognized(original.to_string()));
        };

        if kind != "pull" || owner.is_empty() || repo.is_empty() {
            return Err(LocatorError::Unrecognized(original.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number: parse_number(number)?,
        })
    }

    fn parse_shorthand(input: &str, original: &str) -> Result<Self, LocatorError> {
        let (repo_part, number) = input
            .split_once('#')
            .ok_or_else(|| LocatorError::Unrecognized(original.to_string()))?;
        let (owner, repo) = repo_part
            .split_once('/')
            .ok_or_else(|| LocatorError::Unrecognized(original.to_string()))?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(LocatorError::Unrecognized(original.to_string()));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            number: parse_number(number)?,
        })
    }
}

fn parse_number(raw: &str) -> Result<u32, LocatorError> {
    raw.parse()
        .map_err(|_| LocatorError::InvalidNumber(raw.to_string()))
}

impl FromStr for PrLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PrLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let pr = PrLocator::parse("https://github.com/ROKT/canal/pull/14777").unwrap();
        assert_eq!(pr.owner, "ROKT");
        assert_eq!(pr.repo, "canal");
        assert_eq!(pr.number, 14777);
    }

    #[test]
    fn test_parse_shorthand() {
        let pr = PrLocator::parse("ROKT/canal#14777").unwrap();
        assert_eq!(pr.owner, "ROKT");
        assert_eq!(pr.repo, "canal");
        assert_eq!(pr.number, 14777);
    }

    #[test]
    fn test_parse_trailing_slash() {
        let pr = PrLocator::parse("https://github.com/ROKT/canal/pull/14777/").unwrap();
        assert_eq!(pr.number, 14777);
    }

    #[test]
    fn test_parse_http_scheme() {
        let pr = PrLocator::parse("http://github.com/owner/repo/pull/7").unwrap();
        assert_eq!(pr.number, 7);
    }

    #[test]
    fn test_rejects_issues_url() {
        let err = PrLocator::parse("https://github.com/owner/repo/issues/123").unwrap_err();
        assert!(matches!(err, LocatorError::Unrecognized(_)));
    }

    #[test]
    fn test_rejects_short_url_path() {
        assert!(PrLocator::parse("https://github.com/owner/repo").is_err());
        assert!(PrLocator::parse("https://github.com/owner/repo/pull").is_err());
    }

    #[test]
    fn test_rejects_extra_url_segments() {
        assert!(PrLocator::parse("https://github.com/owner/repo/pull/1/files").is_err());
    }

    #[test]
    fn test_rejects_bare_string() {
        assert!(PrLocator::parse("not-a-reference").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_pr_number() {
        let err = PrLocator::parse("owner/repo#abc").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidNumber(_)));
    }

    #[test]
    fn test_rejects_empty_owner_or_repo() {
        assert!(PrLocator::parse("/repo#1").is_err());
        assert!(PrLocator::parse("owner/#1").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let pr = PrLocator::parse("owner/repo#42").unwrap();
        assert_eq!(pr.to_string(), "owner/repo#42");
        assert_eq!(PrLocator::parse(&pr.to_string()).unwrap(), pr);
    }
}
