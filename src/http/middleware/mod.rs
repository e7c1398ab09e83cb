//! Request middleware.

pub mod tenant;

pub use tenant::{tenant_rewrite_middleware, ResolvedTenant, TenantState};
