use super::Cli;
use crate::comment::{
    decode_comments, decode_reviews, filter_by_author, most_recent_per_file, sanitize_bodies,
};
use crate::config::Config;
use crate::error::LocatorError;
use crate::github::{GhClient, PrLocator};
use crate::output::{self, OutputFormat};
use tracing::{debug, info};

pub fn execute(args: Cli) -> anyhow::Result<()> {
    let mut config = Config::resolve(args.config.as_deref())?;

    // Apply CLI overrides
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(lines) = args.snippet_lines {
        config.snippet_lines = lines;
    }
    if args.no_snippet {
        config.snippets = false;
    }
    if args.author.is_some() {
        config.author = args.author.clone();
    }
    if args.include_reviews {
        config.include_reviews = true;
    }
    if args.strip_html {
        config.strip_html = true;
    }

    config.validate()?;

    let pr = resolve_locator(&args)?;
    debug!("Resolved PR reference {}", pr);

    let client = GhClient::new(config.gh_binary.clone());

    let mut comments = decode_comments(client.review_comments(&pr)?);

    if config.include_reviews {
        let reviews = decode_reviews(client.pull_reviews(&pr)?);
        debug!("Including {} top-level review(s)", reviews.len());
        comments.extend(reviews);
    }

    info!("Fetched {} comment(s) from {}", comments.len(), pr);

    if config.strip_html {
        comments = sanitize_bodies(comments);
    }

    // Fixed filter order: author first, then most-recent-per-file.
    comments = filter_by_author(comments, config.author.as_deref());
    if args.most_recent {
        comments = most_recent_per_file(comments);
    }

    // Only the claude format renders PR metadata; skip the extra fetch
    // otherwise.
    let pr_info = if config.format == OutputFormat::Claude {
        Some(client.pull_request(&pr)?)
    } else {
        None
    };

    let payload = output::render(
        config.format,
        &comments,
        pr_info.as_ref(),
        config.snippets,
        config.snippet_lines,
    );
    output::write_payload(args.output.as_deref(), &payload)?;

    Ok(())
}

/// Explicit --owner/--repo/--pr-number flags win; the positional reference
/// is parsed otherwise; neither is an error.
fn resolve_locator(args: &Cli) -> Result<PrLocator, LocatorError> {
    if let (Some(owner), Some(repo), Some(number)) = (&args.owner, &args.repo, args.pr_number) {
        return Ok(PrLocator {
            owner: owner.clone(),
            repo: repo.clone(),
            number,
        });
    }

    match &args.pr {
        Some(reference) => reference.parse(),
        None => Err(LocatorError::Missing),
    }
}
