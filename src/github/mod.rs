mod client;
mod locator;

pub use client::{GhClient, PullRequestInfo};
pub use locator::PrLocator;
