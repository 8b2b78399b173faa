//! ckmap computes Chidamber & Kemerer object-oriented metrics for Python
//! codebases: WMC, DIT, NOC, CBO, RFC, and LCOM4 per class, plus
//! cross-metric weighting, population summaries, and threshold
//! categorization at the project level.

pub mod aggregation;
pub mod analyzers;
pub mod builtins;
pub mod cli;
pub mod complexity;
pub mod config;
pub mod core;
pub mod io;
pub mod metrics;
pub mod model;
pub mod python;
pub mod thresholds;

pub use aggregation::{get_aggregated_metrics, CombinedProjectMetrics};
pub use analyzers::{process_path, CkAnalyzer};
pub use crate::core::errors::Error;
pub use crate::core::{ClassMetrics, ProjectMetrics};
pub use thresholds::{categorize_metrics_by_threshold, ThresholdReport};
