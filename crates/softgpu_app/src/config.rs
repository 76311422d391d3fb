use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings of the demo renderer. Missing fields take their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Number of frames to render; the cube turns between frames.
    pub frames: u32,
    pub output_dir: PathBuf,
    pub clear_color: [f32; 4],
    /// Image used as the cube texture. A checkerboard is generated when absent.
    pub texture: Option<PathBuf>,
    /// Use the rayon row-parallel draw.
    pub parallel: bool,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Rotation around Y between frames, in degrees.
    pub spin_degrees: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            frames: 1,
            output_dir: PathBuf::from("out"),
            clear_color: [0.1, 0.1, 0.15, 1.0],
            texture: None,
            parallel: true,
            fov_degrees: 60.0,
            near: 0.1,
            far: 100.0,
            spin_degrees: 15.0,
        }
    }
}

impl RenderConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
