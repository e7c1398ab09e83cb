//! Multi-tenant host routing gateway.
//!
//! Maps tenant subdomains (`acme.example.com/raffle1`) onto path-prefixed
//! application routes (`/acme/raffle1`) and forwards everything to a single
//! upstream application.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod tenant;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use tenant::{RoutingDecision, TenantResolver};
