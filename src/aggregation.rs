//! Cross-metric project aggregation: per-class weighting plus mean and
//! median summaries over the whole class population.

use crate::core::{ClassMetrics, ProjectMetrics, METRIC_NAMES};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The seven metric values of one class as floats, the common currency of
/// weighting and summarization.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CombinedClassMetrics {
    pub wmc: f64,
    pub dit: f64,
    pub noc: f64,
    pub cbo: f64,
    pub rfc: f64,
    pub lcom4: f64,
    pub lcom4_normalized: f64,
}

impl CombinedClassMetrics {
    fn to_array(self) -> [f64; 7] {
        [
            self.wmc,
            self.dit,
            self.noc,
            self.cbo,
            self.rfc,
            self.lcom4,
            self.lcom4_normalized,
        ]
    }

    fn from_array(values: [f64; 7]) -> Self {
        Self {
            wmc: values[0],
            dit: values[1],
            noc: values[2],
            cbo: values[3],
            rfc: values[4],
            lcom4: values[5],
            lcom4_normalized: values[6],
        }
    }
}

impl From<&ClassMetrics> for CombinedClassMetrics {
    fn from(metrics: &ClassMetrics) -> Self {
        let mut values = [0.0; 7];
        for (slot, name) in values.iter_mut().zip(METRIC_NAMES) {
            *slot = metrics.value_of(name).unwrap_or(0.0);
        }
        Self::from_array(values)
    }
}

/// Project-level aggregation bundle: the originals, the cross-metric
/// weighted view, and the population summaries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CombinedProjectMetrics {
    pub original_metrics: BTreeMap<String, CombinedClassMetrics>,
    pub weighted_metrics: BTreeMap<String, CombinedClassMetrics>,
    /// Metric-wise sum of the weighted per-class values.
    pub weighted_metrics_combined: CombinedClassMetrics,
    pub mean_metrics: CombinedClassMetrics,
    pub median_metrics: CombinedClassMetrics,
}

/// Aggregate a project's class summary. An empty project yields all-zero
/// summaries rather than an error.
pub fn get_aggregated_metrics(project: &ProjectMetrics) -> CombinedProjectMetrics {
    let original_metrics: BTreeMap<String, CombinedClassMetrics> = project
        .class_summary
        .iter()
        .map(|(name, metrics)| (name.clone(), CombinedClassMetrics::from(metrics)))
        .collect();

    let weighted_metrics = combine_metrics(&original_metrics);
    let weighted_metrics_combined = combine_weighted_metrics(&weighted_metrics);
    let mean_metrics = calculate_mean_metrics(&original_metrics);
    let median_metrics = calculate_median_metrics(&original_metrics);

    CombinedProjectMetrics {
        original_metrics,
        weighted_metrics,
        weighted_metrics_combined,
        mean_metrics,
        median_metrics,
    }
}

/// Weight each class's value of a metric by how large the class looks on
/// the other metrics, relative to the project totals. Metrics whose project
/// sum is zero carry no signal and are left out of the weight; if none
/// remain, the weight degenerates to 1 and the value passes through.
pub fn combine_metrics(
    originals: &BTreeMap<String, CombinedClassMetrics>,
) -> BTreeMap<String, CombinedClassMetrics> {
    let mut sums = [0.0; 7];
    for metrics in originals.values() {
        for (total, value) in sums.iter_mut().zip(metrics.to_array()) {
            *total += value;
        }
    }

    originals
        .iter()
        .map(|(name, metrics)| {
            let values = metrics.to_array();
            let mut weighted = [0.0; 7];
            for target in 0..values.len() {
                weighted[target] = values[target] * weight_for(target, values, &sums);
            }
            (name.clone(), CombinedClassMetrics::from_array(weighted))
        })
        .collect()
}

/// Mean of the class's normalized shares across every metric other than
/// the target, skipping metrics with a zero project sum.
fn weight_for(target: usize, values: [f64; 7], sums: &[f64; 7]) -> f64 {
    let mut share_total = 0.0;
    let mut count = 0;
    for (metric, (&value, &sum)) in values.iter().zip(sums).enumerate() {
        if metric == target || sum == 0.0 {
            continue;
        }
        share_total += value / sum;
        count += 1;
    }
    if count == 0 {
        1.0
    } else {
        share_total / count as f64
    }
}

/// Collapse the weighted per-class view into a single record by summing
/// each metric over all classes.
pub fn combine_weighted_metrics(
    weighted: &BTreeMap<String, CombinedClassMetrics>,
) -> CombinedClassMetrics {
    let mut totals = [0.0; 7];
    for metrics in weighted.values() {
        for (total, value) in totals.iter_mut().zip(metrics.to_array()) {
            *total += value;
        }
    }
    CombinedClassMetrics::from_array(totals)
}

pub fn calculate_mean_metrics(
    originals: &BTreeMap<String, CombinedClassMetrics>,
) -> CombinedClassMetrics {
    if originals.is_empty() {
        return CombinedClassMetrics::default();
    }
    let count = originals.len() as f64;
    let mut totals = [0.0; 7];
    for metrics in originals.values() {
        for (total, value) in totals.iter_mut().zip(metrics.to_array()) {
            *total += value;
        }
    }
    for total in &mut totals {
        *total /= count;
    }
    CombinedClassMetrics::from_array(totals)
}

pub fn calculate_median_metrics(
    originals: &BTreeMap<String, CombinedClassMetrics>,
) -> CombinedClassMetrics {
    if originals.is_empty() {
        return CombinedClassMetrics::default();
    }
    let mut medians = [0.0; 7];
    for metric in 0..medians.len() {
        let mut values: Vec<f64> = originals
            .values()
            .map(|m| m.to_array()[metric])
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        medians[metric] = median_of_sorted(&values);
    }
    CombinedClassMetrics::from_array(medians)
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(entries: &[(&str, [f64; 7])]) -> BTreeMap<String, CombinedClassMetrics> {
        entries
            .iter()
            .map(|(name, values)| (name.to_string(), CombinedClassMetrics::from_array(*values)))
            .collect()
    }

    #[test]
    fn empty_project_aggregates_to_zeroes() {
        let aggregated = get_aggregated_metrics(&ProjectMetrics::default());
        assert!(aggregated.original_metrics.is_empty());
        assert_eq!(aggregated.mean_metrics, CombinedClassMetrics::default());
        assert_eq!(aggregated.median_metrics, CombinedClassMetrics::default());
        assert_eq!(
            aggregated.weighted_metrics_combined,
            CombinedClassMetrics::default()
        );
    }

    #[test]
    fn all_zero_sums_leave_values_unweighted() {
        // Every other metric has a zero project sum, so each weight
        // degenerates to 1 and the originals pass through unchanged.
        let data = originals(&[("Only", [4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])]);
        let weighted = combine_metrics(&data);
        assert_eq!(weighted["Only"].wmc, 4.0);
    }

    #[test]
    fn weight_is_mean_of_shares_over_other_metrics() {
        // Two classes; for A, wmc weight = mean(dit share, cbo share)
        // = mean(1/4, 2/10) = 0.225, other metric sums are zero.
        let data = originals(&[
            ("A", [8.0, 1.0, 0.0, 2.0, 0.0, 0.0, 0.0]),
            ("B", [2.0, 3.0, 0.0, 8.0, 0.0, 0.0, 0.0]),
        ]);
        let weighted = combine_metrics(&data);
        assert!((weighted["A"].wmc - 8.0 * 0.225).abs() < 1e-9);
        // B's wmc weight = mean(3/4, 8/10) = 0.775.
        assert!((weighted["B"].wmc - 2.0 * 0.775).abs() < 1e-9);
    }

    #[test]
    fn combined_is_metric_wise_sum() {
        let weighted = originals(&[
            ("A", [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("B", [3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let combined = combine_weighted_metrics(&weighted);
        assert_eq!(combined.wmc, 4.0);
        assert_eq!(combined.dit, 6.0);
    }

    #[test]
    fn mean_and_median_over_originals() {
        let data = originals(&[
            ("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("B", [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("C", [9.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        assert_eq!(calculate_mean_metrics(&data).wmc, 4.0);
        assert_eq!(calculate_median_metrics(&data).wmc, 2.0);
    }

    #[test]
    fn even_population_median_averages_the_middles() {
        let data = originals(&[
            ("A", [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("B", [2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("C", [4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("D", [10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        assert_eq!(calculate_median_metrics(&data).wmc, 3.0);
    }
}
