//! Scratch directory configuration.

use std::path::PathBuf;

use domain::ScratchArea;
use serde::{Deserialize, Serialize};

/// Where transient files live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory the area directories are resolved against
    #[serde(default = "default_root")]
    pub scratch_root: PathBuf,

    /// Synthesized speech, served under `/audio`
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Intermediate files
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,

    /// Client uploads
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_temp_dir() -> String {
    "temp".to_string()
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            scratch_root: default_root(),
            audio_dir: default_audio_dir(),
            temp_dir: default_temp_dir(),
            uploads_dir: default_uploads_dir(),
        }
    }
}

impl StorageConfig {
    /// Directory backing an area
    pub fn area_dir(&self, area: ScratchArea) -> PathBuf {
        let name = match area {
            ScratchArea::Audio => &self.audio_dir,
            ScratchArea::Temp => &self.temp_dir,
            ScratchArea::Uploads => &self.uploads_dir,
        };
        self.scratch_root.join(name)
    }

    pub fn validate(&self) -> Result<(), String> {
        let dirs = [&self.audio_dir, &self.temp_dir, &self.uploads_dir];
        if dirs.iter().any(|d| d.trim().is_empty()) {
            return Err("storage directory names must not be empty".to_string());
        }
        if dirs[0] == dirs[1] || dirs[0] == dirs[2] || dirs[1] == dirs[2] {
            return Err("storage areas must use distinct directories".to_string());
        }
        Ok(())
    }
}
