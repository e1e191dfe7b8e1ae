use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate_version_resolver::client::load_package;
use crate_version_resolver::client::notify::FlashMessages;
use crate_version_resolver::client::route::{CrateVersionRoute, ResolvedVersion};
use crate_version_resolver::config::{self, ClientConfig};
use crate_version_resolver::docs::{DocsRsClient, DocumentationProbe};
use crate_version_resolver::version::catalog::{VersionOrder, sort_versions};
use crate_version_resolver::version::registries::CratesIoRegistry;
use crate_version_resolver::version::release_tracks::ReleaseTracks;
use crate_version_resolver::version::types::PackageSummary;

#[derive(Parser)]
#[command(name = "crate-version-resolver")]
#[command(version, about = "Resolve the current version of a crate")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the version shown for each crate (`name` or `name@version`)
    Resolve {
        #[arg(required = true)]
        crates: Vec<String>,
    },
    /// List the versions and release tracks of a crate
    Versions {
        crate_name: String,
        /// `semver` or `date`
        #[arg(long, default_value = "semver")]
        sort: VersionOrder,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging();
    let config = ClientConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Command::Resolve { crates } => runtime.block_on(run_resolve(&config, &crates)),
        Command::Versions { crate_name, sort } => {
            runtime.block_on(run_versions(&config, &crate_name, sort))
        }
    }
}

/// Log to the data directory, or to stderr if it cannot be created
fn init_logging() -> Option<WorkerGuard> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_path = config::log_path();

    let file_target = log_path.parent().zip(log_path.file_name()).filter(|(dir, _)| {
        std::fs::create_dir_all(dir)
            .inspect_err(|e| eprintln!("Failed to create log directory {:?}: {}", dir, e))
            .is_ok()
    });

    match file_target {
        Some((dir, file_name)) => {
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter())
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            None
        }
    }
}

async fn run_resolve(config: &ClientConfig, specs: &[String]) -> anyhow::Result<()> {
    let registry = CratesIoRegistry::new(&config.registry.base_url);
    let flash = Arc::new(FlashMessages::new());
    let probe = config.docs.enabled.then(|| {
        Arc::new(DocumentationProbe::new(
            Arc::new(DocsRsClient::new(&config.docs.base_url)),
            &config.docs.base_url,
        ))
    });
    let (tx, mut rx) = mpsc::unbounded_channel();
    let route = CrateVersionRoute::new(flash.clone(), probe, tx);

    let results = join_all(
        specs
            .iter()
            .map(|spec| resolve_spec(&registry, &route, spec)),
    )
    .await;
    // Only the running probes keep the update channel open now
    drop(route);

    for message in flash.drain() {
        eprintln!("{message}");
    }

    let mut packages = Vec::new();
    let mut failed = 0;
    for (spec, result) in specs.iter().zip(results) {
        match result {
            Ok((package, resolved)) => {
                let yanked = if resolved.record.yanked { " (yanked)" } else { "" };
                println!("{}@{}{}", resolved.crate_name, resolved.record.num, yanked);
                packages.push(package);
            }
            Err(e) => {
                error!("Failed to resolve {}: {:#}", spec, e);
                eprintln!("{spec}: {e:#}");
                failed += 1;
            }
        }
    }

    let wait = Duration::from_millis(config.docs.wait_ms);
    let collect = async {
        while let Some(update) = rx.recv().await {
            if let Some(package) = packages.iter_mut().find(|p| p.name == update.package) {
                package.apply_documentation_update(update);
            }
        }
    };
    if tokio::time::timeout(wait, collect).await.is_err() {
        info!("Stopped waiting for documentation probes after {:?}", wait);
    }

    for package in &packages {
        if let Some(url) = &package.documentation {
            println!("{} documentation: {}", package.name, url);
        }
    }

    if failed > 0 {
        return Err(anyhow!("{failed} crate(s) could not be resolved"));
    }
    Ok(())
}

async fn resolve_spec(
    registry: &CratesIoRegistry,
    route: &CrateVersionRoute,
    spec: &str,
) -> anyhow::Result<(PackageSummary, ResolvedVersion)> {
    let (crate_name, version) = match spec.split_once('@') {
        Some((name, version)) => (name, Some(version)),
        None => (spec, None),
    };

    let package = load_package(registry, crate_name, VersionOrder::Semver).await?;
    let resolved = route
        .model(&package, version)
        .ok_or_else(|| anyhow!("crate '{crate_name}' has no versions"))?;

    Ok((package, resolved))
}

async fn run_versions(
    config: &ClientConfig,
    crate_name: &str,
    order: VersionOrder,
) -> anyhow::Result<()> {
    let registry = CratesIoRegistry::new(&config.registry.base_url);
    let package = load_package(&registry, crate_name, order).await?;

    println!("{} (max {})", package.name, package.max_version);
    for version in &package.versions {
        let mut flags = Vec::new();
        if version.yanked {
            flags.push("yanked");
        }
        if version.is_prerelease() {
            flags.push("pre-release");
        }
        match version.created_at {
            Some(at) => print!("  {} {}", version.num, at.format("%Y-%m-%d")),
            None => print!("  {}", version.num),
        }
        if flags.is_empty() {
            println!();
        } else {
            println!(" [{}]", flags.join(", "));
        }
    }

    let mut by_semver = package.versions.clone();
    sort_versions(&mut by_semver, VersionOrder::Semver);
    let tracks = ReleaseTracks::from_versions(&by_semver);
    if !tracks.is_empty() {
        println!("Release tracks:");
        for (name, details) in tracks.iter() {
            println!("  {}: {}", name, details.highest);
        }
    }

    Ok(())
}
