//! Tenant rewrite middleware.
//! Applies the resolver's decision to the request URI before it is forwarded.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::{request_host, rewrite_path};
use crate::observability::metrics;
use crate::routing::AssetFilter;
use crate::tenant::{RoutingDecision, TenantResolver, TenantSlug};

/// State required for tenant resolution.
#[derive(Clone, Debug)]
pub struct TenantState {
    pub resolver: Arc<TenantResolver>,
    pub assets: Arc<AssetFilter>,
}

/// Tenant attached to requests whose path was rewritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTenant(pub TenantSlug);

pub async fn tenant_rewrite_middleware(
    State(state): State<TenantState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    // 1. Static assets never reach the resolver.
    if state.assets.is_excluded(req.uri().path()) {
        metrics::record_resolution("asset");
        return next.run(req).await;
    }

    let host = request_host(&req).to_string();
    let path = req.uri().path().to_string();

    // 2. Resolve.
    let decision = state.resolver.resolve(&host, &path);
    metrics::record_resolution(decision.outcome());

    // 3. Apply. A URI we cannot build degrades to pass-through.
    if let RoutingDecision::Rewrite { new_path } = decision {
        match rewrite_path(req.uri(), &new_path) {
            Ok(uri) => {
                tracing::debug!(
                    host = %host,
                    path = %path,
                    new_path = %new_path,
                    "Tenant rewrite"
                );
                if let Some(slug) = state.resolver.tenant_slug(&host) {
                    req.extensions_mut().insert(ResolvedTenant(slug));
                }
                *req.uri_mut() = uri;
            }
            Err(e) => {
                tracing::warn!(
                    host = %host,
                    path = %path,
                    error = %e,
                    "Rewrite failed, passing through"
                );
            }
        }
    } else {
        tracing::trace!(host = %host, path = %path, "Tenant pass-through");
    }

    next.run(req).await
}
