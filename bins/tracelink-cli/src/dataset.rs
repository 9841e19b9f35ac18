//! Dataset loading: JSON transaction dumps from a file or a directory.
//!
//! A dataset is either a single JSON file holding an array of transaction
//! records, or a directory of such files (one per block height in chain
//! exports), concatenated in filename order. Loading happens once, before
//! the engine is invoked; the engine never triggers I/O.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use tracelink_core::error::DatasetError;
use tracelink_core::types::Transaction;

/// Load a dataset from a file or directory path.
///
/// A dataset with zero transactions is rejected: it almost always means a
/// wrong path, and the engine should never start on an unusable corpus.
pub fn load(path: &Path) -> Result<Vec<Transaction>, DatasetError> {
    let metadata = fs::metadata(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let transactions = if metadata.is_dir() {
        load_dir(path)?
    } else {
        load_file(path)?
    };
    if transactions.is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }
    Ok(transactions)
}

/// Parse one JSON file holding an array of transaction records.
pub fn load_file(path: &Path) -> Result<Vec<Transaction>, DatasetError> {
    let bytes = fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let transactions: Vec<Transaction> =
        serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), transactions = transactions.len(), "file loaded");
    Ok(transactions)
}

/// Load every file in a directory, in filename order. Subdirectories are
/// skipped.
pub fn load_dir(dir: &Path) -> Result<Vec<Transaction>, DatasetError> {
    let io_err = |source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let mut all = Vec::new();
    for file in &files {
        all.extend(load_file(file)?);
    }
    Ok(all)
}
