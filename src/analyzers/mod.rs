//! Analysis front end: feeds parsed sources into the model builder and
//! turns the frozen model into project metrics.

pub mod extraction;

use crate::core::errors::Error;
use crate::core::ProjectMetrics;
use crate::io::walker::{is_python_file, FileWalker};
use crate::metrics::calculate_project_metrics;
use crate::model::ModelBuilder;
use crate::python::parse_module;
use std::fs;
use std::path::Path;

/// Incremental analyzer: add sources one at a time, then `finish` to get
/// the project metrics over everything seen.
#[derive(Default)]
pub struct CkAnalyzer {
    builder: ModelBuilder,
}

impl CkAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_filter(filter: Option<Vec<String>>) -> Self {
        Self {
            builder: ModelBuilder::with_class_filter(filter),
        }
    }

    /// Parse and extract one in-memory source unit.
    pub fn add_source(&mut self, content: &str, path: &Path) -> Result<(), Error> {
        let module = parse_module(content, &path.display().to_string())?;
        extraction::extract_module(&mut self.builder, &module, path);
        Ok(())
    }

    pub fn add_file(&mut self, path: &Path) -> Result<(), Error> {
        let content = fs::read_to_string(path)?;
        self.add_source(&content, path)
    }

    /// Freeze the accumulated model and compute all metrics.
    pub fn finish(self) -> ProjectMetrics {
        calculate_project_metrics(&self.builder.freeze())
    }
}

/// Analyze a Python file or a directory tree of Python files. Files that
/// fail to parse or read are logged and skipped; the analysis continues
/// with the remaining sources.
pub fn process_path(
    path: &Path,
    class_filter: Option<Vec<String>>,
    ignore_patterns: &[String],
) -> Result<ProjectMetrics, Error> {
    let mut analyzer = CkAnalyzer::with_class_filter(class_filter);

    if path.is_file() {
        if !is_python_file(path) {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }
        if let Err(e) = analyzer.add_file(path) {
            log::warn!("skipping {}: {e}", path.display());
        }
    } else if path.is_dir() {
        let files = FileWalker::new(path)
            .with_ignore_patterns(ignore_patterns)?
            .find_python_files();
        log::info!("analyzing {} Python files under {}", files.len(), path.display());
        for file in &files {
            if let Err(e) = analyzer.add_file(file) {
                log::warn!("skipping {}: {e}", file.display());
            }
        }
    } else {
        return Err(Error::InvalidPath(path.to_path_buf()));
    }

    Ok(analyzer.finish())
}
