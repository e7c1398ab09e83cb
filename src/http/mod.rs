//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace span, timeout)
//!     → middleware/tenant.rs (asset filter, tenant resolution, path rewrite)
//!     → request.rs (upstream URI)
//!     → server.rs (forward to upstream application)
//!     → Send upstream response to client
//! ```

pub mod middleware;
pub mod request;
pub mod server;

pub use request::RewriteError;
pub use server::{HttpServer, ServerError};
