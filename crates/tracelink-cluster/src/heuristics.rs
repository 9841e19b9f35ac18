//! Heuristic rules mapping (address, transaction) to implicated addresses.
//!
//! Every rule is a pure, total function: it reads only the given transaction
//! and address, never global state, and returns an empty set on malformed
//! records instead of failing. Rules fire binary — an address is implicated
//! or it is not; there is no confidence scoring.

use tracelink_core::types::{Address, Transaction};

/// A single clustering heuristic.
///
/// Implementations must be deterministic and side-effect-free so that the
/// final cluster never depends on exploration order.
pub trait Heuristic: Send + Sync {
    /// Rule name for logging.
    fn name(&self) -> &'static str;

    /// Addresses implicated by this rule for `address` in `tx`.
    ///
    /// May include `address` itself; the caller deduplicates.
    fn evaluate(&self, address: &Address, tx: &Transaction) -> Vec<Address>;
}

/// Common-input-ownership: if `address` appears among a transaction's input
/// addresses, all of that transaction's input addresses are implicated.
///
/// Only the transaction's own input list is consulted; an output's recorded
/// spender reference is never followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonInputOwnership;

impl Heuristic for CommonInputOwnership {
    fn name(&self) -> &'static str {
        "common-input-ownership"
    }

    fn evaluate(&self, address: &Address, tx: &Transaction) -> Vec<Address> {
        if tx.spends_from(address) {
            tx.input_addresses().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

/// Coinbase reward: if the transaction is coinbase and `address` appears
/// among its output addresses, all output addresses are implicated — reward
/// recipients of one coinbase are attributed to one miner or pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinbaseReward;

impl Heuristic for CoinbaseReward {
    fn name(&self) -> &'static str {
        "coinbase-reward"
    }

    fn evaluate(&self, address: &Address, tx: &Transaction) -> Vec<Address> {
        if tx.is_coinbase() && tx.pays_to(address) {
            tx.output_addresses().cloned().collect()
        } else {
            Vec::new()
        }
    }
}

/// Change-address detection: not yet specified.
///
/// Always returns empty. No change-detection logic has been agreed on, and
/// guessing one (smallest output, round numbers) silently changes cluster
/// membership. The slot exists so a future rule drops in via
/// [`ClusterEngine::with_rules`](crate::ClusterEngine::with_rules) without
/// touching the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeAddress;

impl Heuristic for ChangeAddress {
    fn name(&self) -> &'static str {
        "change-address"
    }

    fn evaluate(&self, _address: &Address, _tx: &Transaction) -> Vec<Address> {
        Vec::new()
    }
}

/// The standard rule set, in evaluation order.
pub fn standard_rules() -> Vec<Box<dyn Heuristic>> {
    vec![
        Box::new(CommonInputOwnership),
        Box::new(CoinbaseReward),
        Box::new(ChangeAddress),
    ]
}
