//! The clustering engine: concurrent fixed-point frontier expansion.
//!
//! Starting from a seed address, each iteration evaluates every frontier
//! address concurrently against the shared corpus, barrier-joins, merges the
//! implicated addresses, and carries the genuinely new ones forward as the
//! next frontier. The loop converges when an iteration discovers nothing new.
//!
//! Invariants:
//! - the accumulated set only grows, and each address is evaluated at most
//!   once across the whole run;
//! - workers never write shared state — all merging happens on the
//!   controlling task between barriers, so no locking is needed;
//! - the result depends only on rule outputs and corpus contents, never on
//!   which evaluator finishes first.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use tracelink_core::corpus::TxCorpus;
use tracelink_core::types::Address;

use crate::evaluator::evaluate_address;
use crate::heuristics::{standard_rules, Heuristic};

/// Engine tuning knobs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum evaluator tasks in flight at once. Frontier widths can reach
    /// the corpus address count, so fan-out is gated rather than unbounded.
    pub max_concurrency: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_concurrency: thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
        }
    }
}

/// Result of one clustering run.
#[derive(Debug, Clone)]
pub struct ClusterOutcome {
    /// The seed address the run started from.
    pub seed: Address,
    /// Every address attributed to the seed's controlling entity,
    /// the seed included.
    pub addresses: HashSet<Address>,
    /// Total loop passes, the converging pass included.
    pub iterations: u64,
    /// Total per-address evaluations dispatched.
    pub evaluations: u64,
}

impl ClusterOutcome {
    /// Whether `addr` belongs to the cluster.
    pub fn contains(&self, addr: &Address) -> bool {
        self.addresses.contains(addr)
    }

    /// Cluster size.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// A cluster is never empty: it always holds at least the seed.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The cluster addresses in lexicographic order, for stable output.
    pub fn sorted_addresses(&self) -> Vec<Address> {
        let mut sorted: Vec<Address> = self.addresses.iter().cloned().collect();
        sorted.sort();
        sorted
    }
}

/// Address clustering over one immutable corpus.
///
/// The engine holds no per-run state; independent clustering calls on one
/// engine may run concurrently.
pub struct ClusterEngine {
    corpus: Arc<TxCorpus>,
    rules: Arc<Vec<Box<dyn Heuristic>>>,
    config: EngineConfig,
}

impl ClusterEngine {
    /// Engine with the standard rule set.
    pub fn new(corpus: Arc<TxCorpus>) -> Self {
        Self::with_rules(corpus, standard_rules())
    }

    /// Engine with a custom rule set. The engine is agnostic to which rules
    /// run; swapping rules never requires engine changes.
    pub fn with_rules(corpus: Arc<TxCorpus>, rules: Vec<Box<dyn Heuristic>>) -> Self {
        Self {
            corpus,
            rules: Arc::new(rules),
            config: EngineConfig::default(),
        }
    }

    /// Override the default configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Cluster all addresses attributed to the same entity as `seed`.
    ///
    /// Pure computation over already-loaded data: no I/O, no failure path.
    /// A seed absent from the corpus yields a single-address cluster.
    pub async fn cluster(&self, seed: Address) -> ClusterOutcome {
        let limiter = Arc::new(Semaphore::new(self.config.max_concurrency.max(1)));

        let mut accumulated = HashSet::from([seed.clone()]);
        let mut frontier = vec![seed.clone()];
        let mut iterations = 0u64;
        let mut evaluations = 0u64;

        while !frontier.is_empty() {
            iterations += 1;
            evaluations += frontier.len() as u64;
            debug!(
                iteration = iterations,
                width = frontier.len(),
                known = accumulated.len(),
                "expanding frontier"
            );

            let results = self.expand(std::mem::take(&mut frontier), &limiter).await;

            // Merge on the controlling task only: anything not yet
            // accumulated becomes the next frontier.
            for found in results {
                for address in found {
                    if accumulated.insert(address.clone()) {
                        frontier.push(address);
                    }
                }
            }

            if !frontier.is_empty() {
                debug!(
                    iteration = iterations,
                    new = frontier.len(),
                    "new addresses discovered"
                );
            }
        }

        info!(
            seed = %seed,
            addresses = accumulated.len(),
            iterations,
            evaluations,
            "cluster converged"
        );

        ClusterOutcome {
            seed,
            addresses: accumulated,
            iterations,
            evaluations,
        }
    }

    /// Run one iteration's evaluations and barrier-join.
    ///
    /// Every frontier address gets an independent task; the semaphore bounds
    /// how many run at once. No result is returned until all of them have
    /// completed, so the caller always merges one consistent snapshot.
    async fn expand(
        &self,
        frontier: Vec<Address>,
        limiter: &Arc<Semaphore>,
    ) -> Vec<HashSet<Address>> {
        let width = frontier.len();
        let mut tasks: JoinSet<HashSet<Address>> = JoinSet::new();
        for address in frontier {
            let corpus = Arc::clone(&self.corpus);
            let rules = Arc::clone(&self.rules);
            let limiter = Arc::clone(limiter);
            tasks.spawn(async move {
                let _permit = limiter
                    .acquire_owned()
                    .await
                    .expect("concurrency limiter is never closed");
                evaluate_address(&address, &corpus, &rules)
            });
        }

        let mut results = Vec::with_capacity(width);
        while let Some(joined) = tasks.join_next().await {
            results.push(joined.expect("evaluator task panicked"));
        }
        results
    }
}
