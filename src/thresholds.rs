//! Threshold categorization: buckets every class into quality bands per
//! metric, using the reference band tables from the metrics literature.

use crate::core::ProjectMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Good,
    Normal,
    Bad,
    #[serde(rename = "Not Categorized")]
    NotCategorized,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Good => "Good",
            Category::Normal => "Normal",
            Category::Bad => "Bad",
            Category::NotCategorized => "Not Categorized",
        };
        f.write_str(label)
    }
}

/// One inclusive value band mapped to a category.
struct Band {
    category: Category,
    lower: f64,
    upper: f64,
}

const fn band(category: Category, lower: f64, upper: f64) -> Band {
    Band {
        category,
        lower,
        upper,
    }
}

/// Band tables per metric. CBO and RFC have no established Good/Normal
/// split in the literature, so values below the Bad cutoff stay
/// uncategorized rather than being blessed.
const THRESHOLDS: &[(&str, &[Band])] = &[
    (
        "wmc",
        &[
            band(Category::Good, 0.0, 11.0),
            band(Category::Normal, 11.001, 34.0),
            band(Category::Bad, 34.001, f64::INFINITY),
        ],
    ),
    (
        "dit",
        &[
            band(Category::Good, 0.0, 2.0),
            band(Category::Normal, 2.001, 4.0),
            band(Category::Bad, 4.001, f64::INFINITY),
        ],
    ),
    (
        "noc",
        &[
            band(Category::Good, 0.0, 11.0),
            band(Category::Normal, 11.001, 28.0),
            band(Category::Bad, 28.001, f64::INFINITY),
        ],
    ),
    (
        "cbo",
        &[
            band(Category::Bad, 8.001, f64::INFINITY),
            band(Category::NotCategorized, 0.0, 8.0),
        ],
    ),
    (
        "rfc",
        &[
            band(Category::Bad, 20.001, f64::INFINITY),
            band(Category::NotCategorized, 0.0, 20.0),
        ],
    ),
    (
        "lcom4_normalized",
        &[
            band(Category::Good, 0.0, 0.167),
            band(Category::Normal, 0.167001, 0.725),
            band(Category::Bad, 0.725001, f64::INFINITY),
        ],
    ),
];

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub classes: Vec<String>,
    pub count: usize,
}

/// Categorization result: metric name → category → bucket, plus the number
/// of classes with a usable (non-NaN) value per metric.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub categories: BTreeMap<String, BTreeMap<Category, CategoryBucket>>,
    pub metric_class_counts: BTreeMap<String, usize>,
}

/// Bucket every class of the project into the band tables. NaN values are
/// skipped with a warning; values that fall between bands are warned about
/// and left out of every bucket, but still count toward the metric total.
pub fn categorize_metrics_by_threshold(project: &ProjectMetrics) -> ThresholdReport {
    let mut report = ThresholdReport::default();

    for (metric, bands) in THRESHOLDS {
        // Every category of the band table appears in the result, empty
        // buckets included.
        let mut buckets: BTreeMap<Category, CategoryBucket> = bands
            .iter()
            .map(|b| (b.category, CategoryBucket::default()))
            .collect();
        let mut seen = 0usize;

        for (class_name, metrics) in &project.class_summary {
            let Some(value) = metrics.value_of(metric) else {
                continue;
            };
            if value.is_nan() {
                log::warn!("skipping NaN {metric} value for class {class_name}");
                continue;
            }
            seen += 1;
            match bands
                .iter()
                .find(|b| value >= b.lower && value <= b.upper)
            {
                Some(band) => {
                    let bucket = buckets.entry(band.category).or_default();
                    bucket.classes.push(class_name.clone());
                    bucket.count += 1;
                }
                None => {
                    log::warn!(
                        "{metric} value {value} of class {class_name} matches no band"
                    );
                }
            }
        }

        verify_bucket_counts(metric, &buckets, seen);
        report.categories.insert(metric.to_string(), buckets);
        report.metric_class_counts.insert(metric.to_string(), seen);
    }

    report
}

fn verify_bucket_counts(
    metric: &str,
    buckets: &BTreeMap<Category, CategoryBucket>,
    seen: usize,
) {
    let bucketed: usize = buckets.values().map(|b| b.count).sum();
    if bucketed != seen {
        log::warn!(
            "bucket totals for {metric} disagree: {bucketed} bucketed, {seen} values seen"
        );
    }
}
