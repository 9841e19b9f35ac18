//! Per-address evaluation: one frontier address against the whole corpus.

use std::collections::HashSet;

use tracelink_core::corpus::TxCorpus;
use tracelink_core::types::Address;

use crate::heuristics::Heuristic;

/// Apply every rule to `address` across the corpus and return the directly
/// implicated address set, always including `address` itself.
///
/// Pure function of its arguments: many evaluations may run concurrently
/// over one shared corpus without synchronization. The corpus index narrows
/// the scan to transactions the address appears in; rules return empty for
/// all others, so the result matches a full scan.
pub fn evaluate_address(
    address: &Address,
    corpus: &TxCorpus,
    rules: &[Box<dyn Heuristic>],
) -> HashSet<Address> {
    let mut implicated = HashSet::new();
    implicated.insert(address.clone());
    for tx in corpus.transactions_for(address) {
        for rule in rules {
            implicated.extend(rule.evaluate(address, tx));
        }
    }
    implicated
}
