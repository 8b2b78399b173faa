pub mod errors;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The C&K metric fields of a class record, in report order.
pub const METRIC_NAMES: [&str; 7] = [
    "wmc",
    "dit",
    "noc",
    "cbo",
    "rfc",
    "lcom4",
    "lcom4_normalized",
];

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodMetrics {
    pub complexity: u32,
}

/// Per-class C&K metric record, immutable once produced.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ClassMetrics {
    pub wmc: u32,
    pub dit: u32,
    pub noc: u32,
    pub cbo: u32,
    pub rfc: u32,
    pub lcom4: u32,
    pub lcom4_normalized: f64,
    pub methods: BTreeMap<String, MethodMetrics>,
}

impl ClassMetrics {
    /// Scalar metric value by field name, for the table-driven consumers
    /// (aggregation weighting, threshold categorization).
    pub fn value_of(&self, metric: &str) -> Option<f64> {
        match metric {
            "wmc" => Some(self.wmc as f64),
            "dit" => Some(self.dit as f64),
            "noc" => Some(self.noc as f64),
            "cbo" => Some(self.cbo as f64),
            "rfc" => Some(self.rfc as f64),
            "lcom4" => Some(self.lcom4 as f64),
            "lcom4_normalized" => Some(self.lcom4_normalized),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub classes: BTreeMap<String, ClassMetrics>,
}

/// Project-level bundle: per-file class metrics plus the merged class summary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectMetrics {
    pub files: BTreeMap<String, FileMetrics>,
    pub class_summary: BTreeMap<String, ClassMetrics>,
}

impl ProjectMetrics {
    pub fn class_count(&self) -> usize {
        self.class_summary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_summary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_of_covers_every_metric_name() {
        let metrics = ClassMetrics {
            wmc: 3,
            lcom4_normalized: 0.5,
            ..Default::default()
        };
        for name in METRIC_NAMES {
            assert!(metrics.value_of(name).is_some(), "missing field {name}");
        }
        assert_eq!(metrics.value_of("wmc"), Some(3.0));
        assert_eq!(metrics.value_of("lcom4_normalized"), Some(0.5));
        assert_eq!(metrics.value_of("nope"), None);
    }
}
