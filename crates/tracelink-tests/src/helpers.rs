//! Shared test helpers for building corpora.

use tracelink_core::types::{Address, Transaction, TxInput, TxOutput};

/// Shorthand address constructor.
pub fn addr(s: &str) -> Address {
    Address::from(s)
}

/// A regular spending transaction with the given input and output addresses.
pub fn make_tx(txid: &str, inputs: &[&str], outputs: &[&str]) -> Transaction {
    Transaction {
        txid: txid.into(),
        inputs: inputs
            .iter()
            .map(|a| TxInput {
                coinbase: false,
                address: Some(addr(a)),
                value: 100,
            })
            .collect(),
        outputs: outputs
            .iter()
            .map(|a| TxOutput {
                address: Some(addr(a)),
                value: 100,
                spent: false,
            })
            .collect(),
        time: 1_231_006_505,
    }
}

/// A coinbase transaction paying the given output addresses.
pub fn make_coinbase(txid: &str, outputs: &[&str]) -> Transaction {
    let mut tx = make_tx(txid, &[], outputs);
    tx.inputs.push(TxInput {
        coinbase: true,
        address: None,
        value: 0,
    });
    tx
}
