mod config;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gce_compute_plugin::GceComputeClient;
use gke_gateway::{BackendServiceResolverLocalClient, Service};
use gke_gateway_sdk::{
    BackendServiceResolverClient, BackendServiceResolverError, ComputeClient, Resolution,
    ResolutionRequest, ResolvedBackendService,
};
use static_compute_plugin::StaticComputeClient;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ComputeBackend, ComputeConfig};

/// gkegw - find the backend service behind a GKE Kubernetes Gateway
#[derive(Parser)]
#[command(name = "gkegw")]
#[command(about = "Resolve the backend service behind a GKE Kubernetes Gateway")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the backend service of one gateway and print it as JSON
    Resolve(ResolveArgs),
    /// Validate configuration and exit
    Check,
}

#[derive(Args)]
struct ResolveArgs {
    /// Name of the Kubernetes Gateway resource
    #[arg(long)]
    gateway: String,

    /// Namespace of the Kubernetes Gateway resource
    #[arg(long)]
    namespace: String,

    /// Project owning the load balancer (overrides provider.project)
    #[arg(long)]
    project: Option<String>,

    /// Region of a regional load balancer (overrides provider.region)
    #[arg(long)]
    region: Option<String>,

    /// Give up after this many seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 1) defaults -> 2) YAML (if provided) -> 3) env (GKEGW__*) -> 4) CLI flags
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve(args) => resolve(&config, args).await,
        Commands::Check => check_config(&config),
    }
}

/// Logs go to stderr; stdout carries only command output.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn compute_client(cfg: &ComputeConfig) -> Result<Arc<dyn ComputeClient>> {
    match cfg.backend {
        ComputeBackend::Rest => {
            let client = GceComputeClient::new(&cfg.rest)
                .context("failed to initialize Compute Engine client")?;
            tracing::info!(endpoint = %cfg.rest.endpoint, "using Compute Engine REST backend");
            Ok(Arc::new(client))
        }
        ComputeBackend::Static => {
            tracing::info!(
                scopes = cfg.inventory.scopes.len(),
                "using static compute backend"
            );
            Ok(Arc::new(StaticComputeClient::from_config(&cfg.inventory)))
        }
    }
}

async fn resolve_request(
    client: &dyn BackendServiceResolverClient,
    request: &ResolutionRequest,
    timeout: Option<Duration>,
) -> Result<Option<ResolvedBackendService>, BackendServiceResolverError> {
    let Some(limit) = timeout else {
        return client.resolve(request).await;
    };

    tokio::time::timeout(limit, client.resolve(request))
        .await
        .unwrap_or_else(|_| {
            Err(BackendServiceResolverError::Internal(format!(
                "resolution did not finish within {}s",
                limit.as_secs()
            )))
        })
}

async fn resolve(config: &AppConfig, args: ResolveArgs) -> Result<ExitCode> {
    let outcome = match config
        .provider
        .request(args.gateway, args.namespace, args.project, args.region)
    {
        Ok(request) => {
            let compute = compute_client(&config.compute)?;
            let client = BackendServiceResolverLocalClient::new(Arc::new(Service::new(compute)));
            resolve_request(&client, &request, args.timeout_secs.map(Duration::from_secs)).await
        }
        Err(e) => Err(e.into()),
    };

    let resolution = Resolution::from(outcome);
    println!("{}", serde_json::to_string_pretty(&resolution)?);

    if resolution.has_errors() {
        for diagnostic in &resolution.diagnostics {
            tracing::warn!(summary = %diagnostic.summary, "resolution failed");
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn check_config(config: &AppConfig) -> Result<ExitCode> {
    tracing::info!("Checking configuration...");
    compute_client(&config.compute)?;
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(ExitCode::SUCCESS)
}
