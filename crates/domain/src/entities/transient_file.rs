//! Transient file entity

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::ScratchArea;

/// A short-lived file written on behalf of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientFile {
    pub area: ScratchArea,
    pub file_name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
}

impl TransientFile {
    pub fn new(area: ScratchArea, file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            area,
            file_name: file_name.into(),
            path: path.into(),
            created_at: Utc::now(),
        }
    }

    /// Generate a collision-free file name
    ///
    /// UUID v7 keeps names time-ordered, so a directory listing reads in
    /// creation order.
    #[must_use]
    pub fn unique_name(prefix: &str, extension: &str) -> String {
        format!("{prefix}_{}.{extension}", Uuid::now_v7().simple())
    }
}
