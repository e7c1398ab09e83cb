//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses parse as socket addresses
//! - Validate tenancy rules (root domain shape, non-empty labels)
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("tenancy.root_domain: {reason}")]
    InvalidRootDomain { reason: &'static str },

    #[error("{field}: entries must not be empty")]
    EmptyEntry { field: &'static str },

    #[error("assets.excluded_extensions: {value:?} must not contain '/' or inner dots")]
    InvalidExtension { value: String },

    #[error("assets.excluded_prefixes: {value:?} must start with '/'")]
    InvalidPrefix { value: String },

    #[error("{field}: must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Validate a parsed configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    check_address(&mut errors, "upstream.address", &config.upstream.address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    let tenancy = &config.tenancy;
    let root = &tenancy.root_domain;
    if root.is_empty() {
        errors.push(ValidationError::InvalidRootDomain { reason: "must not be empty" });
    } else if root.starts_with('.') || root.ends_with('.') {
        errors.push(ValidationError::InvalidRootDomain {
            reason: "must not start or end with '.'",
        });
    } else if root.contains(':') || root.contains('/') {
        errors.push(ValidationError::InvalidRootDomain {
            reason: "must be a bare hostname without port or path",
        });
    }

    check_no_empty(&mut errors, "tenancy.reserved_subdomains", &tenancy.reserved_subdomains);
    check_no_empty(&mut errors, "tenancy.bypass_host_suffixes", &tenancy.bypass_host_suffixes);
    check_no_empty(&mut errors, "tenancy.local_hosts", &tenancy.local_hosts);

    for prefix in &config.assets.excluded_prefixes {
        if !prefix.starts_with('/') {
            errors.push(ValidationError::InvalidPrefix { value: prefix.clone() });
        }
    }
    for ext in &config.assets.excluded_extensions {
        let bare = ext.strip_prefix('.').unwrap_or(ext);
        if bare.is_empty() || bare.contains('.') || bare.contains('/') {
            errors.push(ValidationError::InvalidExtension { value: ext.clone() });
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.connect_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "timeouts.request_secs" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_no_empty(errors: &mut Vec<ValidationError>, field: &'static str, values: &[String]) {
    if values.iter().any(|v| v.trim().is_empty()) {
        errors.push(ValidationError::EmptyEntry { field });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&GatewayConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.tenancy.root_domain = String::new();
        config.tenancy.bypass_host_suffixes.push(String::new());
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: "not-an-address".to_string(),
        }));
        assert!(errors.contains(&ValidationError::EmptyEntry {
            field: "tenancy.bypass_host_suffixes",
        }));
        assert!(errors.contains(&ValidationError::ZeroTimeout {
            field: "timeouts.request_secs",
        }));
    }

    #[test]
    fn test_blank_tenancy_entries() {
        let mut config = GatewayConfig::default();
        config.tenancy.reserved_subdomains.push("  ".to_string());
        config.tenancy.local_hosts.push(String::new());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyEntry { field: "tenancy.reserved_subdomains" },
                ValidationError::EmptyEntry { field: "tenancy.local_hosts" },
            ]
        );
    }

    #[test]
    fn test_root_domain_shape() {
        for bad in [".example.com", "example.com.", "example.com:443", "example.com/app"] {
            let mut config = GatewayConfig::default();
            config.tenancy.root_domain = bad.to_string();
            let errors = validate_config(&config).unwrap_err();
            assert!(
                matches!(errors[0], ValidationError::InvalidRootDomain { .. }),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_asset_entries() {
        let mut config = GatewayConfig::default();
        config.assets.excluded_prefixes = vec!["_next/static".to_string()];
        config.assets.excluded_extensions = vec![".png".to_string(), "tar.gz".to_string()];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidPrefix { value: "_next/static".to_string() },
                ValidationError::InvalidExtension { value: "tar.gz".to_string() },
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = GatewayConfig::default();
        config.observability.metrics_address = "nope".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
