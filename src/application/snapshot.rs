//! Catalog snapshot parsing
//!
//! The backend exports the whole brand tree in one JSON document. Two shapes
//! are accepted: a bare top-level array of brands, or an envelope object with
//! metadata (`{"generatedAt": ..., "brands": [...]}`). Edits happen on the
//! backend and produce a fresh snapshot; this side only ever reads.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::Brand;

/// A full catalog export plus optional metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub brands: Vec<Brand>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from JSON text, accepting both export shapes.
    pub fn from_json(content: &str, origin: &Path) -> ApplicationResult<Self> {
        let trimmed = content.trim_start();
        let snapshot = if trimmed.starts_with('[') {
            let brands: Vec<Brand> =
                serde_json::from_str(content).map_err(|e| snapshot_err(origin, e))?;
            Self {
                generated_at: None,
                brands,
            }
        } else {
            serde_json::from_str(content).map_err(|e| snapshot_err(origin, e))?
        };
        debug!(
            "parsed snapshot from {}: {} brands",
            origin.display(),
            snapshot.brands.len()
        );
        Ok(snapshot)
    }
}

fn snapshot_err(path: &Path, e: serde_json::Error) -> ApplicationError {
    ApplicationError::Snapshot {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("catalog.json")
    }

    #[test]
    fn given_bare_array_when_parsing_then_brands_loaded_without_metadata() {
        let json = r#"[{"id": "b1", "name": "Caterpillar"}]"#;
        let snapshot = CatalogSnapshot::from_json(json, &origin()).unwrap();
        assert_eq!(snapshot.brands.len(), 1);
        assert!(snapshot.generated_at.is_none());
    }

    #[test]
    fn given_envelope_object_when_parsing_then_metadata_is_captured() {
        let json = r#"{
            "generatedAt": "2026-08-01T10:30:00Z",
            "brands": [{"id": "b1", "name": "Caterpillar"}]
        }"#;
        let snapshot = CatalogSnapshot::from_json(json, &origin()).unwrap();
        assert_eq!(snapshot.brands.len(), 1);
        assert!(snapshot.generated_at.is_some());
    }

    #[test]
    fn given_envelope_without_brands_when_parsing_then_empty_catalog() {
        let json = r#"{"generatedAt": "2026-08-01T10:30:00Z"}"#;
        let snapshot = CatalogSnapshot::from_json(json, &origin()).unwrap();
        assert!(snapshot.brands.is_empty());
    }

    #[test]
    fn given_malformed_json_when_parsing_then_snapshot_error() {
        let err = CatalogSnapshot::from_json("{not json", &origin()).unwrap_err();
        assert!(matches!(err, ApplicationError::Snapshot { .. }));
    }
}
