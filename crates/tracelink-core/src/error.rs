//! Error types for Tracelink.
//!
//! Clustering itself is total: the engine and the heuristic rules never
//! fail on loaded data. The only fatal error surface is dataset loading,
//! which happens before the engine is ever invoked.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a transaction dataset from disk.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset {0} contains no transactions")]
    Empty(PathBuf),
}
