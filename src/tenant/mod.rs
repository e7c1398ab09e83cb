//! Tenant resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (Host header, path)
//!     → host.rs (strip port)
//!     → resolver.rs (classify host, derive slug)
//!     → Return: PassThrough or Rewrite { new_path }
//! ```
//!
//! # Design Decisions
//! - Resolver built once from config, immutable at runtime
//! - Ordered guard checks, first match wins
//! - Custom domains are never looked up here; they pass through to the
//!   application, which owns the domain → tenant mapping

pub mod host;
pub mod resolver;

pub use resolver::{HostKind, RoutingDecision, TenantResolver, TenantSlug};
