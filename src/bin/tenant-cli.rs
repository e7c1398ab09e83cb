use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use tenant_gateway::config::{load_config, GatewayConfig};
use tenant_gateway::routing::AssetFilter;
use tenant_gateway::tenant::{HostKind, TenantResolver};

#[derive(Parser)]
#[command(name = "tenant-cli")]
#[command(about = "Inspect tenant routing rules offline", long_about = None)]
struct Cli {
    /// Gateway configuration file. Defaults are used when omitted.
    #[arg(short, long, env = "TENANT_GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the routing decision for a host and path
    Resolve {
        /// Host header value, port allowed
        #[arg(long)]
        host: String,
        /// Request path
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Validate the configuration and print it
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    match cli.command {
        Commands::Resolve { host, path } => {
            let report = resolve_report(&config, &host, &path)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Check => {
            println!("{}", check_report(&config)?);
            eprintln!("Configuration OK");
        }
    }

    Ok(())
}

/// JSON description of how the gateway would route `host` and `path`.
fn resolve_report(config: &GatewayConfig, host: &str, path: &str) -> serde_json::Result<Value> {
    let assets = AssetFilter::from_config(&config.assets);
    if assets.is_excluded(path) {
        return Ok(json!({
            "host": host,
            "path": path,
            "asset": true,
            "decision": "pass_through",
        }));
    }

    let resolver = TenantResolver::new(&config.tenancy);
    let kind = match resolver.classify(host) {
        HostKind::Local => "local".to_string(),
        HostKind::Preview => "preview".to_string(),
        HostKind::Root => "root".to_string(),
        HostKind::Reserved(label) => format!("reserved:{}", label),
        HostKind::Tenant(slug) => format!("tenant:{}", slug),
        HostKind::Custom => "custom".to_string(),
    };

    let mut report = serde_json::to_value(resolver.resolve(host, path))?;
    report["host"] = json!(host);
    report["path"] = json!(path);
    report["asset"] = json!(false);
    report["host_kind"] = json!(kind);
    Ok(report)
}

/// Effective configuration rendered back as TOML.
fn check_report(config: &GatewayConfig) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_report_for_tenant() {
        let report = resolve_report(&GatewayConfig::default(), "ACME.example.com:443", "/r1")
            .unwrap();
        assert_eq!(
            report,
            json!({
                "decision": "rewrite",
                "new_path": "/acme/r1",
                "host": "ACME.example.com:443",
                "path": "/r1",
                "asset": false,
                "host_kind": "tenant:acme",
            })
        );
    }

    #[test]
    fn test_resolve_report_host_kinds() {
        let config = GatewayConfig::default();
        for (host, kind) in [
            ("localhost:3000", "local"),
            ("pr-1.vercel.app", "preview"),
            ("www.example.com", "root"),
            ("Admin.example.com", "reserved:admin"),
            ("mycustomdomain.com", "custom"),
        ] {
            let report = resolve_report(&config, host, "/tickets").unwrap();
            assert_eq!(report["host_kind"], kind, "host {}", host);
            assert_eq!(report["decision"], "pass_through");
            assert!(report.get("new_path").is_none());
        }
    }

    #[test]
    fn test_resolve_report_for_asset() {
        let report = resolve_report(&GatewayConfig::default(), "acme.example.com", "/logo.png")
            .unwrap();
        assert_eq!(report["asset"], true);
        assert_eq!(report["decision"], "pass_through");
        assert!(report.get("host_kind").is_none());
    }

    #[test]
    fn test_check_report_round_trips() {
        let mut config = GatewayConfig::default();
        config.tenancy.root_domain = "rifas.io".to_string();

        let rendered = check_report(&config).unwrap();
        assert!(rendered.contains("[tenancy]"));
        assert!(rendered.contains("root_domain = \"rifas.io\""));

        let parsed = tenant_gateway::config::parse_config(&rendered).unwrap();
        assert_eq!(parsed.tenancy.root_domain, "rifas.io");
        assert_eq!(parsed.assets.excluded_extensions, config.assets.excluded_extensions);
    }
}
