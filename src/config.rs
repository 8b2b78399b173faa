//! Analysis configuration loaded from a `ckmap.toml` file.

use crate::core::errors::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "ckmap.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CkConfig {
    /// Restrict analysis to these class names.
    pub classes: Option<Vec<String>>,
    /// Glob patterns for files to skip during the walk.
    pub ignore: Vec<String>,
}

impl CkConfig {
    /// Load configuration. An explicitly given path must exist and parse;
    /// otherwise `ckmap.toml` in the working directory is used when
    /// present, and defaults apply when it is not.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::Configuration(format!("cannot parse {}: {e}", path.display()))
        })
    }
}
