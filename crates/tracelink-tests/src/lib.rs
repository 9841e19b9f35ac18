//! Integration and property tests for Tracelink. See `tests/`.

pub mod helpers;
