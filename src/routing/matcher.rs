//! Path matching logic for the static-asset filter.
//!
//! # Responsibilities
//! - Match path prefix (case-sensitive)
//! - Match file extension of the last path segment (case-sensitive)
//! - Combine conditions with OR semantics
//!
//! # Design Decisions
//! - Paths are compared as received, no percent-decoding
//! - Empty `AnyMatcher` never matches
//! - No regex to guarantee O(n) matching

/// Trait for matching request paths against conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches the request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Matcher for PathPrefixMatcher {
    fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }
}

/// Matches paths ending in `.<extension>`.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    suffix: String,
}

impl ExtensionMatcher {
    /// Create a new extension matcher. A leading dot is optional.
    pub fn new(extension: impl AsRef<str>) -> Self {
        let ext = extension.as_ref().trim_start_matches('.');
        Self {
            suffix: format!(".{}", ext),
        }
    }
}

impl Matcher for ExtensionMatcher {
    fn matches(&self, path: &str) -> bool {
        path.ends_with(&self.suffix)
    }
}

/// Combines multiple matchers with OR semantics.
#[derive(Debug)]
pub struct AnyMatcher {
    matchers: Vec<Box<dyn Matcher>>,
}

impl AnyMatcher {
    pub fn new(matchers: Vec<Box<dyn Matcher>>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyMatcher {
    fn matches(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(path))
    }
}
