//! Request path filtering.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → filter.rs (asset exclusion lookup)
//!     → matcher.rs (evaluate prefix/extension conditions)
//!     → Return: excluded (forward as-is) or eligible for tenant resolution
//!
//! Filter Compilation (at startup):
//!     AssetsConfig
//!     → Compile matchers
//!     → Freeze as immutable AssetFilter
//! ```
//!
//! # Design Decisions
//! - Matchers compiled at startup, immutable at runtime
//! - No regex in hot path (prefix/suffix matching only)
//! - Deterministic: same path always gets the same answer

pub mod filter;
pub mod matcher;

pub use filter::AssetFilter;
