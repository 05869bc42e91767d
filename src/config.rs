//! Book configuration, read from a camelCase JSON file.

use crate::error::PipelineError;
use progbook_layout::LayoutConfig;
use progbook_schedule::NormalizerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where and how fragments are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    /// Subdirectory of `output_dir` holding `\input` sub-fragments.
    pub generated_dir: String,
    /// Directory of `<track slug>.html` devroom descriptions.
    pub description_dir: PathBuf,
    /// Lay out pages on the rayon pool when available.
    pub parallel: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            generated_dir: "generated".to_string(),
            description_dir: PathBuf::from("devroom_descr"),
            parallel: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookConfig {
    pub schedule: NormalizerConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
}

impl BookConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded configuration from '{}'", path.display());
        Ok(config)
    }
}
