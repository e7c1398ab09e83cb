//! Static-asset request filter.
//!
//! # Responsibilities
//! - Compile the `[assets]` config into matchers
//! - Tell the tenant layer which requests to leave alone
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Excluded requests are forwarded as-is, never resolved

use crate::config::AssetsConfig;
use crate::routing::matcher::{AnyMatcher, ExtensionMatcher, Matcher, PathPrefixMatcher};

/// Decides which paths bypass tenant resolution.
#[derive(Debug)]
pub struct AssetFilter {
    excluded: AnyMatcher,
}

impl AssetFilter {
    /// Build the filter from configuration.
    pub fn from_config(config: &AssetsConfig) -> Self {
        let mut matchers: Vec<Box<dyn Matcher>> = Vec::new();

        for prefix in &config.excluded_prefixes {
            matchers.push(Box::new(PathPrefixMatcher::new(prefix.clone())));
        }
        for ext in &config.excluded_extensions {
            matchers.push(Box::new(ExtensionMatcher::new(ext)));
        }

        tracing::debug!(matchers = matchers.len(), "Asset filter compiled");

        Self {
            excluded: AnyMatcher::new(matchers),
        }
    }

    /// Returns true if the path is a static asset that skips tenant resolution.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded.matches(path)
    }
}
