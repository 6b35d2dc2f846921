use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::catalog::{Catalog, SymptomEntry};
use crate::types::identifiers::CatalogVersion;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fully loaded catalog + keyword list, the only gateway to an engine.
///
/// Loading is all-or-nothing: both inputs parse or the whole load fails, so a
/// partial catalog is never exposed.
#[derive(Debug, Clone)]
pub struct CatalogBundle {
    pub catalog: Catalog,
    /// Keyword list in caller-defined priority order. May contain duplicates;
    /// later duplicates find nothing left to match.
    pub keywords: Vec<String>,
    pub version: CatalogVersion,
    pub loaded_at: DateTime<Utc>, // informational only
}

impl CatalogBundle {
    /// Read and parse the catalog and keyword files.
    pub fn load(catalog_path: &Path, keywords_path: &Path) -> Result<Self, CatalogError> {
        let catalog_bytes = fs::read(catalog_path)?;
        let keyword_bytes = fs::read(keywords_path)?;

        let entries: Vec<SymptomEntry> = serde_json::from_slice(&catalog_bytes)?;
        let keywords: Vec<String> = serde_json::from_slice(&keyword_bytes)?;

        let mut content = catalog_bytes;
        content.extend_from_slice(&keyword_bytes);

        Ok(CatalogBundle {
            catalog: Catalog::new(entries),
            keywords,
            version: CatalogVersion::from_content(&content),
            loaded_at: Utc::now(),
        })
    }

    /// Build a bundle from already-parsed data. The version is computed from
    /// the canonical serialization of both inputs.
    pub fn from_parts(
        entries: Vec<SymptomEntry>,
        keywords: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut content = serde_json::to_vec(&entries)?;
        content.extend(serde_json::to_vec(&keywords)?);

        Ok(CatalogBundle {
            catalog: Catalog::new(entries),
            keywords,
            version: CatalogVersion::from_content(&content),
            loaded_at: Utc::now(),
        })
    }
}
