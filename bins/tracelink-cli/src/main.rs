//! tracelink — transaction-graph address clustering CLI.
//!
//! Loads a JSON transaction dataset, clusters the addresses attributed to
//! the same entity as a seed address, and emits a JSON report.

mod dataset;
mod report;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use tracelink_cluster::{ClusterEngine, EngineConfig};
use tracelink_core::corpus::TxCorpus;
use tracelink_core::types::Address;

use crate::report::ClusterReport;

/// Transaction-graph address clustering.
#[derive(Parser)]
#[command(name = "tracelink")]
#[command(version, about = "Follow the co-spends.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cluster the addresses controlled by the same entity as a seed address.
    Cluster(ClusterArgs),
    /// Print dataset statistics without clustering.
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ClusterArgs {
    /// Seed address to expand from.
    address: String,

    /// Transaction dataset: a JSON file or a directory of per-block files.
    #[arg(short = 'f', long)]
    dataset: PathBuf,

    /// Write the JSON report to this path instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cap on concurrent evaluations (default: available parallelism).
    #[arg(long)]
    max_concurrency: Option<usize>,
}

#[derive(Args)]
struct InspectArgs {
    /// Transaction dataset: a JSON file or a directory of per-block files.
    #[arg(short = 'f', long)]
    dataset: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cluster(args) => run_cluster(args).await,
        Commands::Inspect(args) => run_inspect(args),
    }
}

async fn run_cluster(args: ClusterArgs) -> Result<()> {
    let started = Instant::now();

    info!(dataset = %args.dataset.display(), "loading transactions");
    let transactions = dataset::load(&args.dataset)
        .with_context(|| format!("load dataset {}", args.dataset.display()))?;
    let corpus = Arc::new(TxCorpus::new(transactions));
    info!(
        transactions = corpus.len(),
        addresses = corpus.distinct_address_count(),
        "dataset loaded"
    );

    let mut engine = ClusterEngine::new(Arc::clone(&corpus));
    if let Some(max_concurrency) = args.max_concurrency {
        engine = engine.with_config(EngineConfig { max_concurrency });
    }

    let outcome = engine.cluster(Address::from(args.address)).await;
    let report = ClusterReport::new(&outcome, started.elapsed());

    match &args.output {
        Some(path) => {
            report.write_to(path)?;
            info!(output = %path.display(), "report written");
        }
        None => println!("{}", report.to_json().context("serialize report")?),
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let transactions = dataset::load(&args.dataset)
        .with_context(|| format!("load dataset {}", args.dataset.display()))?;
    let corpus = TxCorpus::new(transactions);
    let coinbase = corpus
        .all_transactions()
        .iter()
        .filter(|tx| tx.is_coinbase())
        .count();

    println!("transactions:       {}", corpus.len());
    println!("distinct addresses: {}", corpus.distinct_address_count());
    println!("coinbase:           {coinbase}");
    Ok(())
}
