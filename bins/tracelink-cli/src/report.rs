//! Cluster result emission as JSON.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tracelink_cluster::ClusterOutcome;

/// Serializable summary of one clustering run.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClusterReport {
    /// The seed address the run started from.
    pub seed: String,
    /// Cluster size, seed included.
    pub address_count: usize,
    /// Cluster members in lexicographic order.
    pub addresses: Vec<String>,
    /// Expansion passes until convergence.
    pub iterations: u64,
    /// Per-address evaluations dispatched in total.
    pub evaluations: u64,
    /// Wall-clock time for load plus clustering, in milliseconds.
    pub elapsed_ms: u64,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
}

impl ClusterReport {
    /// Build a report from an engine outcome.
    pub fn new(outcome: &ClusterOutcome, elapsed: Duration) -> Self {
        Self {
            seed: outcome.seed.to_string(),
            address_count: outcome.len(),
            addresses: outcome
                .sorted_addresses()
                .into_iter()
                .map(|a| a.to_string())
                .collect(),
            iterations: outcome.iterations,
            evaluations: outcome.evaluations,
            elapsed_ms: elapsed.as_millis() as u64,
            generated_at: Utc::now(),
        }
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON report to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create directory {}", dir.display()))?;
        }
        let json = self.to_json().context("serialize report")?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tracelink_core::types::Address;

    fn outcome() -> ClusterOutcome {
        ClusterOutcome {
            seed: Address::from("b"),
            addresses: HashSet::from([Address::from("b"), Address::from("a"), Address::from("c")]),
            iterations: 2,
            evaluations: 3,
        }
    }

    #[test]
    fn report_sorts_addresses() {
        let report = ClusterReport::new(&outcome(), Duration::from_millis(42));
        assert_eq!(report.addresses, vec!["a", "b", "c"]);
        assert_eq!(report.address_count, 3);
        assert_eq!(report.seed, "b");
        assert_eq!(report.elapsed_ms, 42);
    }

    #[test]
    fn json_round_trip() {
        let report = ClusterReport::new(&outcome(), Duration::from_millis(1));
        let json = report.to_json().unwrap();
        let parsed: ClusterReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.addresses, report.addresses);
        assert_eq!(parsed.iterations, report.iterations);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/report.json");
        let report = ClusterReport::new(&outcome(), Duration::from_millis(1));
        report.write_to(&path).unwrap();

        let parsed: ClusterReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.address_count, 3);
    }
}
