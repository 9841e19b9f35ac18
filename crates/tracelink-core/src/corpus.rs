//! The transaction corpus: an immutable, ordered transaction sequence with
//! a read-only address index.
//!
//! A corpus is built once by the loader before clustering starts and never
//! mutated afterwards, so concurrent readers need no synchronization. The
//! address index maps every address to the positions of the transactions it
//! appears in (either side), turning each per-address evaluation into direct
//! lookups instead of a full corpus scan. Lookups are result-equivalent to
//! scanning: heuristic rules return empty for transactions an address does
//! not appear in.

use std::collections::HashMap;

use crate::types::{Address, Transaction};

/// An immutable transaction corpus for one clustering run.
#[derive(Debug, Clone, Default)]
pub struct TxCorpus {
    transactions: Vec<Transaction>,
    by_address: HashMap<Address, Vec<usize>>,
}

impl TxCorpus {
    /// Build a corpus from loaded transactions, indexing every address that
    /// appears on either side of any transaction.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let mut by_address: HashMap<Address, Vec<usize>> = HashMap::new();
        for (pos, tx) in transactions.iter().enumerate() {
            for addr in tx.input_addresses().chain(tx.output_addresses()) {
                let positions = by_address.entry(addr.clone()).or_default();
                // An address may appear several times in one transaction.
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }
        Self {
            transactions,
            by_address,
        }
    }

    /// All transactions in load order.
    pub fn all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The transactions `addr` appears in (as input or output), in load order.
    pub fn transactions_for<'a>(
        &'a self,
        addr: &Address,
    ) -> impl Iterator<Item = &'a Transaction> {
        self.by_address
            .get(addr)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(|&pos| &self.transactions[pos])
    }

    /// Whether `addr` appears anywhere in the corpus.
    pub fn contains_address(&self, addr: &Address) -> bool {
        self.by_address.contains_key(addr)
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when the corpus holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct addresses appearing in the corpus.
    ///
    /// This is also the upper bound on clustering iterations.
    pub fn distinct_address_count(&self) -> usize {
        self.by_address.len()
    }
}
