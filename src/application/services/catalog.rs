//! Catalog service
//!
//! Loads catalog snapshots through the filesystem boundary and exposes the
//! read-side operations: filtering, stats, validation.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::snapshot::CatalogSnapshot;
use crate::domain::catalog::{self, CatalogStats};
use crate::domain::{filter, Brand};
use crate::infrastructure::traits::FileSystem;

/// Service for loading and querying catalog snapshots.
pub struct CatalogService {
    fs: Arc<dyn FileSystem>,
}

impl CatalogService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a catalog snapshot from disk.
    pub fn load(&self, path: &Path) -> ApplicationResult<CatalogSnapshot> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("snapshot not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }

        let content =
            self.fs
                .read_to_string(path)
                .map_err(|e| ApplicationError::OperationFailed {
                    context: format!("read snapshot {}", path.display()),
                    source: Box::new(e),
                })?;

        let snapshot = CatalogSnapshot::from_json(&content, path)?;
        debug!(
            "loaded {} brands, {} nodes total",
            snapshot.brands.len(),
            CatalogStats::collect(&snapshot.brands).node_count()
        );
        Ok(snapshot)
    }

    /// Filter the catalog by a free-text query (delegates to the engine).
    pub fn search(&self, brands: &[Brand], query: &str) -> Vec<Brand> {
        filter(brands, query)
    }

    /// Aggregate per-level counts over the catalog.
    pub fn stats(&self, brands: &[Brand]) -> CatalogStats {
        CatalogStats::collect(brands)
    }

    /// Check the snapshot's id-uniqueness contract.
    pub fn validate(&self, brands: &[Brand]) -> ApplicationResult<()> {
        catalog::validate(brands)?;
        Ok(())
    }
}
