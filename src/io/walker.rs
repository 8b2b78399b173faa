//! Source discovery: walks a directory tree for Python files, honoring
//! gitignore rules and user-supplied ignore patterns.

use crate::core::errors::Error;
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<Pattern>,
}

impl FileWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Add glob patterns whose matches (by full path or file name) are
    /// excluded from the walk.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self, Error> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// All Python files under the root, sorted for deterministic output.
    pub fn find_python_files(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| is_python_file(path) && !self.is_ignored(path))
            .collect();
        files.sort();
        files
    }

    fn is_ignored(&self, path: &Path) -> bool {
        self.ignore_patterns.iter().any(|pattern| {
            pattern.matches_path(path)
                || path
                    .file_name()
                    .map_or(false, |name| pattern.matches(&name.to_string_lossy()))
        })
    }
}

pub fn is_python_file(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "py")
}
