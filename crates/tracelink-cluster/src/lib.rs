//! # tracelink-cluster — Address clustering engine.
//!
//! Given a seed address and an immutable [`TxCorpus`](tracelink_core::TxCorpus),
//! computes the set of addresses attributed to the same controlling entity
//! under a fixed set of binary heuristic rules:
//! - **Common-input ownership**: addresses jointly spent as inputs of one
//!   transaction share a controller.
//! - **Coinbase reward**: all reward outputs of one coinbase transaction
//!   share a controller.
//! - **Change detection**: an explicit stub; see [`heuristics::ChangeAddress`].
//!
//! The engine expands a frontier iteration by iteration, evaluating every
//! frontier address concurrently and barrier-joining before state updates,
//! until a fixed point is reached. Results depend only on rule outputs and
//! corpus contents, never on scheduling order.

pub mod engine;
pub mod evaluator;
pub mod heuristics;

pub use engine::{ClusterEngine, ClusterOutcome, EngineConfig};
pub use evaluator::evaluate_address;
pub use heuristics::{standard_rules, Heuristic};
