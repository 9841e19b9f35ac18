//! Transaction record types.
//!
//! Records mirror the JSON shape produced by chain export tools: each
//! transaction carries an ordered list of inputs and outputs, and every
//! input/output address field is optional. An absent or empty address is
//! never treated as a real address — the accessor methods here filter both.
//! Unknown wire fields (sigscripts, witnesses, spender references) are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque address identifier.
///
/// The clustering engine never interprets the internal structure of an
/// address; it is an identity key and nothing more.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from any string-like value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty string, which is not a real address.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Address {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A transaction input, consuming a previous output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TxInput {
    /// True when this input represents new issuance with no real
    /// predecessor output.
    pub coinbase: bool,
    /// Source address, when the export could resolve one.
    pub address: Option<Address>,
    /// Value in base units.
    pub value: u64,
}

impl TxInput {
    /// The source address, if present and non-empty.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|a| !a.is_empty())
    }
}

/// A transaction output, creating a new spendable coin.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct TxOutput {
    /// Destination address, when the export could resolve one.
    pub address: Option<Address>,
    /// Value in base units.
    pub value: u64,
    /// Whether the output has been spent downstream.
    pub spent: bool,
}

impl TxOutput {
    /// The destination address, if present and non-empty.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|a| !a.is_empty())
    }
}

/// An immutable transaction record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Transaction {
    /// Transaction identifier as exported (hex string).
    pub txid: String,
    /// Inputs in wire order.
    pub inputs: Vec<TxInput>,
    /// Outputs in wire order.
    pub outputs: Vec<TxOutput>,
    /// Unix timestamp in seconds.
    pub time: u64,
}

impl Transaction {
    /// Iterate the present, non-empty input addresses in wire order.
    pub fn input_addresses(&self) -> impl Iterator<Item = &Address> {
        self.inputs.iter().filter_map(TxInput::address)
    }

    /// Iterate the present, non-empty output addresses in wire order.
    pub fn output_addresses(&self) -> impl Iterator<Item = &Address> {
        self.outputs.iter().filter_map(TxOutput::address)
    }

    /// Check if this is a coinbase transaction (first input flagged).
    ///
    /// Total: a record with no inputs at all is not coinbase, not a panic.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.first().is_some_and(|input| input.coinbase)
    }

    /// True if `addr` appears among the input addresses.
    pub fn spends_from(&self, addr: &Address) -> bool {
        self.input_addresses().any(|a| a == addr)
    }

    /// True if `addr` appears among the output addresses.
    pub fn pays_to(&self, addr: &Address) -> bool {
        self.output_addresses().any(|a| a == addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(addr: &str) -> TxInput {
        TxInput {
            coinbase: false,
            address: Some(Address::from(addr)),
            value: 100,
        }
    }

    fn output(addr: &str) -> TxOutput {
        TxOutput {
            address: Some(Address::from(addr)),
            value: 100,
            spent: false,
        }
    }

    // --- Address ---

    #[test]
    fn address_roundtrips_as_plain_string() {
        let addr: Address = serde_json::from_str("\"1KFHE7w\"").unwrap();
        assert_eq!(addr.as_str(), "1KFHE7w");
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"1KFHE7w\"");
    }

    #[test]
    fn empty_address_detected() {
        assert!(Address::from("").is_empty());
        assert!(!Address::from("a").is_empty());
    }

    // --- TxInput / TxOutput accessors ---

    #[test]
    fn input_address_filters_empty() {
        let present = input("addr1");
        assert_eq!(present.address().unwrap().as_str(), "addr1");

        let empty = TxInput {
            address: Some(Address::from("")),
            ..TxInput::default()
        };
        assert!(empty.address().is_none());

        let absent = TxInput::default();
        assert!(absent.address().is_none());
    }

    #[test]
    fn output_address_filters_empty() {
        let empty = TxOutput {
            address: Some(Address::from("")),
            ..TxOutput::default()
        };
        assert!(empty.address().is_none());
        assert!(output("addr2").address().is_some());
    }

    // --- Transaction ---

    #[test]
    fn input_addresses_skip_missing() {
        let tx = Transaction {
            txid: "t1".into(),
            inputs: vec![input("a"), TxInput::default(), input("b")],
            outputs: vec![],
            time: 0,
        };
        let addrs: Vec<&str> = tx.input_addresses().map(Address::as_str).collect();
        assert_eq!(addrs, vec!["a", "b"]);
    }

    #[test]
    fn output_addresses_skip_missing() {
        let tx = Transaction {
            txid: "t1".into(),
            inputs: vec![],
            outputs: vec![output("x"), TxOutput::default(), output("y")],
            time: 0,
        };
        let addrs: Vec<&str> = tx.output_addresses().map(Address::as_str).collect();
        assert_eq!(addrs, vec!["x", "y"]);
    }

    #[test]
    fn coinbase_detection() {
        let cb = Transaction {
            txid: "t1".into(),
            inputs: vec![TxInput {
                coinbase: true,
                ..TxInput::default()
            }],
            outputs: vec![output("x")],
            time: 0,
        };
        assert!(cb.is_coinbase());
        assert!(!Transaction::default().is_coinbase(), "no inputs is not coinbase");

        let regular = Transaction {
            txid: "t2".into(),
            inputs: vec![input("a")],
            outputs: vec![],
            time: 0,
        };
        assert!(!regular.is_coinbase());
    }

    #[test]
    fn spends_from_and_pays_to() {
        let tx = Transaction {
            txid: "t1".into(),
            inputs: vec![input("a"), input("b")],
            outputs: vec![output("c")],
            time: 0,
        };
        assert!(tx.spends_from(&Address::from("a")));
        assert!(!tx.spends_from(&Address::from("c")));
        assert!(tx.pays_to(&Address::from("c")));
        assert!(!tx.pays_to(&Address::from("b")));
    }

    // --- Wire compatibility ---

    #[test]
    fn deserializes_export_record_with_extra_fields() {
        // Representative of a chain export record: extra fields present,
        // one input address empty.
        let json = r#"{
            "txid": "4a5e1e4b",
            "size": 204,
            "version": 1,
            "fee": 0,
            "inputs": [
                {"coinbase": true, "txid": "", "output": 0, "sigscript": "04ff", "sequence": 4294967295, "address": "", "value": 0, "witness": []}
            ],
            "outputs": [
                {"address": "1A1zP1eP", "pkscript": "4104", "value": 5000000000, "spent": false}
            ],
            "block": {"height": 0, "position": 0},
            "time": 1231006505,
            "rbf": false,
            "weight": 816
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.is_coinbase());
        assert_eq!(tx.input_addresses().count(), 0);
        assert_eq!(tx.output_addresses().count(), 1);
        assert_eq!(tx.time, 1231006505);
    }

    #[test]
    fn deserializes_minimal_record() {
        let tx: Transaction = serde_json::from_str(r#"{"txid": "aa"}"#).unwrap();
        assert_eq!(tx.txid, "aa");
        assert!(tx.inputs.is_empty());
        assert!(tx.outputs.is_empty());
        assert!(!tx.is_coinbase());
    }
}
