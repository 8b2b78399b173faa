//! Report rendering: JSON, plain terminal tables, and LaTeX tabulars.

use crate::aggregation::{CombinedClassMetrics, CombinedProjectMetrics};
use crate::thresholds::{Category, ThresholdReport};
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
    Latex,
}

/// Everything a writer needs to render one analysis run.
#[derive(Serialize)]
pub struct AnalysisReport<'a> {
    pub metrics: &'a CombinedProjectMetrics,
    pub thresholds: &'a ThresholdReport,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()>;
}

/// Build a writer for the requested format, targeting a file when an
/// output path is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
        OutputFormat::Latex => Box::new(LatexWriter::new(sink)),
    })
}

pub struct JsonWriter {
    writer: Box<dyn Write>,
}

impl JsonWriter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl OutputWriter for JsonWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

const METRIC_HEADERS: [&str; 7] = ["WMC", "DIT", "NOC", "CBO", "RFC", "LCOM4", "LCOM4n"];

fn metric_row(metrics: &CombinedClassMetrics) -> [f64; 7] {
    [
        metrics.wmc,
        metrics.dit,
        metrics.noc,
        metrics.cbo,
        metrics.rfc,
        metrics.lcom4,
        metrics.lcom4_normalized,
    ]
}

pub struct TerminalWriter {
    writer: Box<dyn Write>,
}

impl TerminalWriter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }

    fn write_class_table(
        &mut self,
        title: &str,
        rows: impl Iterator<Item = (String, [f64; 7])>,
    ) -> Result<()> {
        writeln!(self.writer, "\n## {title}\n")?;
        write!(self.writer, "{:<30}", "Class")?;
        for header in METRIC_HEADERS {
            write!(self.writer, "{header:>10}")?;
        }
        writeln!(self.writer)?;
        for (name, values) in rows {
            write!(self.writer, "{name:<30}")?;
            for value in values {
                write!(self.writer, "{:>10}", format_number(value, 3, false))?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let metrics = report.metrics;

        self.write_class_table(
            "Class metrics",
            metrics
                .original_metrics
                .iter()
                .map(|(name, m)| (name.clone(), metric_row(m))),
        )?;

        self.write_class_table(
            "Weighted class metrics",
            metrics
                .weighted_metrics
                .iter()
                .map(|(name, m)| (name.clone(), metric_row(m))),
        )?;

        self.write_class_table(
            "Project summary",
            [
                ("weighted sum".to_string(), metric_row(&metrics.weighted_metrics_combined)),
                ("mean".to_string(), metric_row(&metrics.mean_metrics)),
                ("median".to_string(), metric_row(&metrics.median_metrics)),
            ]
            .into_iter(),
        )?;

        writeln!(self.writer, "\n## Threshold categories\n")?;
        for (metric, buckets) in &report.thresholds.categories {
            write!(self.writer, "{metric:<20}")?;
            for category in [
                Category::Good,
                Category::Normal,
                Category::Bad,
                Category::NotCategorized,
            ] {
                let count = buckets.get(&category).map_or(0, |b| b.count);
                write!(self.writer, "  {category}: {count}")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(
            self.writer,
            "\nWMC weighted methods, DIT inheritance depth, NOC children, \
             CBO coupling, RFC response set, LCOM4 cohesion components, \
             LCOM4n normalized to [0, 1]"
        )?;
        Ok(())
    }
}

pub struct LatexWriter {
    writer: Box<dyn Write>,
}

impl LatexWriter {
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl OutputWriter for LatexWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> Result<()> {
        let metrics = report.metrics;
        let means = metric_row(&metrics.mean_metrics);
        let medians = metric_row(&metrics.median_metrics);
        let sums = metric_row(&metrics.weighted_metrics_combined);

        writeln!(self.writer, "\\begin{{tabular}}{{l|rrrr}}")?;
        writeln!(
            self.writer,
            "Metric & Mean & Median & Mean/Median & Weighted sum \\\\ \\hline"
        )?;
        for (i, header) in METRIC_HEADERS.iter().enumerate() {
            // Division by a zero median is reported as inf, not an error.
            let ratio = if medians[i] != 0.0 {
                means[i] / medians[i]
            } else {
                f64::INFINITY
            };
            writeln!(
                self.writer,
                "{header} & {} & {} & {} & {} \\\\",
                format_number(means[i], 3, true),
                format_number(medians[i], 3, true),
                format_number(ratio, 3, true),
                format_number(sums[i], 3, true),
            )?;
        }
        writeln!(self.writer, "\\end{{tabular}}")?;

        writeln!(self.writer)?;
        writeln!(self.writer, "\\begin{{tabular}}{{l|rrrr}}")?;
        writeln!(
            self.writer,
            "Metric & Good & Normal & Bad & Not categorized \\\\ \\hline"
        )?;
        for (metric, buckets) in &report.thresholds.categories {
            let count = |c: Category| buckets.get(&c).map_or(0, |b| b.count);
            writeln!(
                self.writer,
                "{} & {} & {} & {} & {} \\\\",
                metric.replace('_', "\\_"),
                count(Category::Good),
                count(Category::Normal),
                count(Category::Bad),
                count(Category::NotCategorized),
            )?;
        }
        writeln!(self.writer, "\\end{{tabular}}")?;
        Ok(())
    }
}

/// Render a value to `decimals` places, trimming to an integer spelling
/// when the fraction is zero. LaTeX output uses a comma decimal separator.
fn format_number(value: f64, decimals: usize, comma_separator: bool) -> String {
    let rendered = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.decimals$}")
    };
    if comma_separator {
        rendered.replace('.', ",")
    } else {
        rendered
    }
}
