use anyhow::{Context, Result};
use ckmap::cli::Cli;
use ckmap::config::CkConfig;
use ckmap::io::output::{create_writer, AnalysisReport};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    let config = CkConfig::load(cli.config.as_deref())?;
    let class_filter = cli.classes.clone().or_else(|| config.classes.clone());

    let project = ckmap::process_path(&cli.path, class_filter, &config.ignore)?;
    if project.is_empty() {
        log::warn!("no classes found under {}", cli.path.display());
    }

    let metrics = ckmap::get_aggregated_metrics(&project);
    let thresholds = ckmap::categorize_metrics_by_threshold(&project);

    let mut writer = create_writer(cli.format.into(), cli.output.as_deref())?;
    writer.write_report(&AnalysisReport {
        metrics: &metrics,
        thresholds: &thresholds,
    })?;

    if let Some(path) = &cli.json_metrics {
        dump_json(path, &metrics)?;
    }
    if let Some(path) = &cli.json_categories {
        dump_json(path, &thresholds)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    serde_json::to_writer_pretty(file, value)?;
    Ok(())
}
