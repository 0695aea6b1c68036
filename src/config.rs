//! Renderer configuration.
//!
//! Command names and staging paths can be given in a JSON document; every
//! field is optional and falls back to the Graphviz defaults:
//!
//! ```json
//! {
//!   "dot": "/usr/local/bin/dot",
//!   "dotty": "xdot",
//!   "neato": "neato",
//!   "temp_dot": "tmp_dot.dot",
//!   "temp_neo": "tmp_neo.dot"
//! }
//! ```

use crate::error::{DotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// External commands and temporary files used by the [`Renderer`].
///
/// [`Renderer`]: crate::Renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Direct renderer, used for image export.
    pub dot: String,
    /// Interactive viewer, used for display.
    pub dotty: String,
    /// Layout-only engine, used for the two-stage pipeline.
    pub neato: String,
    /// Document handed to the viewer or the image exporter.
    pub temp_dot: PathBuf,
    /// Unpositioned document handed to the layout engine.
    pub temp_neo: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            dot: "dot".to_string(),
            dotty: "dotty".to_string(),
            neato: "neato".to_string(),
            temp_dot: PathBuf::from("tmp_dot.dot"),
            temp_neo: PathBuf::from("tmp_neo.dot"),
        }
    }
}

impl RendererConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DotError::io(path, e))?;
        Self::from_json_str(&text)
    }
}
