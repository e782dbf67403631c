//! Configuration structures for extraction and the record store.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FraError, Result};

use super::claim::DEFAULT_DOCUMENT_TYPE;

/// Main configuration for the fra toolkit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FraConfig {
    /// Field extraction and digitization configuration.
    pub extraction: ExtractionConfig,

    /// Record store configuration.
    pub store: StoreConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Label stamped into `documentType` of every extracted record.
    pub document_type: String,

    /// Characters of raw text returned when extraction finds no identity fields.
    pub raw_text_preview_chars: usize,

    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            raw_text_preview_chars: 500,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON snapshot holding the records. Resolved by the caller when unset.
    pub data_file: Option<PathBuf>,

    /// Seed demo villages, claims, assets and recommendations into a new store.
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            seed_demo_data: true,
        }
    }
}

impl FraConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FraError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
