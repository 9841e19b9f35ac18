//! # tracelink-core
//! Transaction records and corpus access for Tracelink.

pub mod corpus;
pub mod error;
pub mod types;

pub use corpus::TxCorpus;
pub use error::DatasetError;
pub use types::{Address, Transaction, TxInput, TxOutput};
