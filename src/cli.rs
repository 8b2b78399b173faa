//! Command line interface definition.

use crate::io::output;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ckmap",
    about = "Chidamber & Kemerer object-oriented metrics for Python code",
    version
)]
pub struct Cli {
    /// Python file or directory to analyze
    pub path: PathBuf,

    /// Only analyze the listed class names
    #[arg(long, value_delimiter = ',')]
    pub classes: Option<Vec<String>>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also dump the aggregated metrics as JSON to this path
    #[arg(long)]
    pub json_metrics: Option<PathBuf>,

    /// Also dump the threshold categories as JSON to this path
    #[arg(long)]
    pub json_categories: Option<PathBuf>,

    /// Configuration file (defaults to ./ckmap.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Terminal,
    Latex,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Terminal => output::OutputFormat::Terminal,
            OutputFormat::Latex => output::OutputFormat::Latex,
        }
    }
}
