//! Hostname-based tenant resolution.
//!
//! # Responsibilities
//! - Classify the request host (local, preview, root, reserved, tenant, custom)
//! - Derive the tenant slug from a subdomain label
//! - Decide whether the request path must be prefixed with the slug
//!
//! # Design Decisions
//! - Pure: no I/O, no shared mutable state, safe to call from any task
//! - Checks run in a fixed order; local and preview hosts win over everything
//! - Only subdomain-label comparisons are case-insensitive
//! - Never fails: anything unrecognised passes through untouched

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::config::TenancyConfig;
use crate::tenant::host::strip_port;

/// Normalised (lowercase) tenant identifier taken from a subdomain label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Normalise a raw subdomain label into a slug.
    pub fn from_label(label: &str) -> Self {
        Self(label.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the HTTP layer should do with a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Forward the request unmodified.
    PassThrough,
    /// Forward the request with its path replaced.
    Rewrite { new_path: String },
}

impl RoutingDecision {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RoutingDecision::PassThrough => "pass_through",
            RoutingDecision::Rewrite { .. } => "rewrite",
        }
    }
}

/// Classification of a request host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKind {
    /// Local development host (exact match).
    Local,
    /// Ephemeral preview deployment.
    Preview,
    /// The root domain or its `www` alias.
    Root,
    /// A subdomain reserved for platform infrastructure.
    Reserved(String),
    /// A tenant subdomain.
    Tenant(TenantSlug),
    /// Anything else: a custom domain, or an empty/unknown host.
    Custom,
}

/// Resolves tenants from the request host.
///
/// Built once from [`TenancyConfig`] and shared read-only (usually via `Arc`).
#[derive(Debug, Clone)]
pub struct TenantResolver {
    root_domain: String,
    subdomain_suffix: String,
    www_host: String,
    reserved_subdomains: HashSet<String>,
    bypass_host_suffixes: Vec<String>,
    local_hosts: HashSet<String>,
}

impl TenantResolver {
    /// Create a resolver from configuration.
    ///
    /// Reserved labels are lowercased; empty bypass suffixes are dropped,
    /// as an empty substring would match every host.
    pub fn new(config: &TenancyConfig) -> Self {
        let root_domain = config.root_domain.clone();

        Self {
            subdomain_suffix: format!(".{}", root_domain),
            www_host: format!("www.{}", root_domain),
            root_domain,
            reserved_subdomains: config
                .reserved_subdomains
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            bypass_host_suffixes: config
                .bypass_host_suffixes
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect(),
            local_hosts: config.local_hosts.iter().cloned().collect(),
        }
    }

    /// Classify a `Host` header value (the port, if any, is ignored).
    pub fn classify(&self, host_header: &str) -> HostKind {
        let host = strip_port(host_header);

        if self.local_hosts.contains(host) {
            return HostKind::Local;
        }
        if self
            .bypass_host_suffixes
            .iter()
            .any(|suffix| host.contains(suffix.as_str()))
        {
            return HostKind::Preview;
        }

        if host == self.root_domain || host == self.www_host {
            return HostKind::Root;
        }

        match host.strip_suffix(self.subdomain_suffix.as_str()) {
            Some(label) => {
                let slug = TenantSlug::from_label(label);
                if self.reserved_subdomains.contains(slug.as_str()) {
                    HostKind::Reserved(slug.0)
                } else {
                    HostKind::Tenant(slug)
                }
            }
            None => HostKind::Custom,
        }
    }

    /// Decide how to route a request for `host_header` and `path`.
    pub fn resolve(&self, host_header: &str, path: &str) -> RoutingDecision {
        let slug = match self.classify(host_header) {
            HostKind::Tenant(slug) => slug,
            _ => return RoutingDecision::PassThrough,
        };

        // Either spelling of the label counts as already prefixed.
        let prefix = format!("/{}", slug);
        let label = strip_port(host_header)
            .strip_suffix(self.subdomain_suffix.as_str())
            .unwrap_or(slug.as_str());
        if path.starts_with(&prefix) || path.starts_with(&format!("/{}", label)) {
            return RoutingDecision::PassThrough;
        }

        RoutingDecision::Rewrite {
            new_path: format!("{}{}", prefix, path),
        }
    }

    /// Tenant slug for a host, if it names a tenant subdomain.
    pub fn tenant_slug(&self, host_header: &str) -> Option<TenantSlug> {
        match self.classify(host_header) {
            HostKind::Tenant(slug) => Some(slug),
            _ => None,
        }
    }
}
