//! CatalogService tests: snapshot loading through the filesystem boundary

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use partscope::application::services::CatalogService;
use partscope::application::ApplicationError;
use partscope::infrastructure::traits::{FileSystem, RealFileSystem};
use partscope::util::testing::init_test_setup;

const SNAPSHOT: &str = r#"{
    "generatedAt": "2026-08-01T10:30:00Z",
    "brands": [
        {
            "id": "b1",
            "name": "Caterpillar",
            "models": [
                {
                    "id": "m1",
                    "name": "C3516",
                    "categories": [
                        {
                            "id": "c1",
                            "name": "Engine Parts",
                            "subCategories": [
                                {
                                    "id": "s1",
                                    "name": "Piston Rings",
                                    "parts": [
                                        {
                                            "id": "p1",
                                            "name": "Piston Ring Set",
                                            "partNumber": "PART-123",
                                            "priceUSD": 249.5,
                                            "stockQuantity": 12
                                        }
                                    ]
                                }
                            ]
                        }
                    ]
                }
            ]
        }
    ]
}"#;

fn write_snapshot(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write snapshot");
    path
}

fn real_service() -> CatalogService {
    init_test_setup();
    CatalogService::new(Arc::new(RealFileSystem))
}

// ============================================================
// Loading from disk
// ============================================================

#[test]
fn given_snapshot_file_when_loading_then_full_hierarchy_is_available() {
    let temp = TempDir::new().unwrap();
    let path = write_snapshot(&temp, "catalog.json", SNAPSHOT);

    let snapshot = real_service().load(&path).unwrap();

    assert!(snapshot.generated_at.is_some());
    assert_eq!(snapshot.brands.len(), 1);
    let part = &snapshot.brands[0].models[0].categories[0].sub_categories[0].parts[0];
    assert_eq!(part.part_number, "PART-123");
    assert_eq!(part.stock_quantity, 12);
}

#[test]
fn given_missing_file_when_loading_then_clear_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.json");

    let err = real_service().load(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}

#[test]
fn given_malformed_snapshot_when_loading_then_snapshot_error() {
    let temp = TempDir::new().unwrap();
    let path = write_snapshot(&temp, "broken.json", "{ not valid json");

    let err = real_service().load(&path).unwrap_err();
    assert!(matches!(err, ApplicationError::Snapshot { .. }));
}

#[test]
fn given_bare_array_snapshot_when_loading_then_brands_parse() {
    let temp = TempDir::new().unwrap();
    let path = write_snapshot(
        &temp,
        "bare.json",
        r#"[{"id": "b1", "name": "Wartsila"}]"#,
    );

    let snapshot = real_service().load(&path).unwrap();
    assert_eq!(snapshot.brands.len(), 1);
    assert!(snapshot.generated_at.is_none());
}

// ============================================================
// Search and validation through the service
// ============================================================

#[test]
fn given_loaded_catalog_when_searching_then_filter_engine_applies() {
    let temp = TempDir::new().unwrap();
    let path = write_snapshot(&temp, "catalog.json", SNAPSHOT);
    let service = real_service();
    let brands = service.load(&path).unwrap().brands;

    let hit = service.search(&brands, "piston");
    assert_eq!(hit.len(), 1);

    let miss = service.search(&brands, "gearbox");
    assert!(miss.is_empty());

    let all = service.search(&brands, "");
    assert_eq!(all, brands);
}

#[test]
fn given_duplicate_part_ids_when_validating_then_domain_error_surfaces() {
    let temp = TempDir::new().unwrap();
    let path = write_snapshot(
        &temp,
        "dup.json",
        r#"[{
            "id": "b1", "name": "X",
            "models": [{
                "id": "m1", "name": "M",
                "categories": [{
                    "id": "c1", "name": "C",
                    "subCategories": [{
                        "id": "s1", "name": "S",
                        "parts": [
                            {"id": "p1", "name": "A", "partNumber": "1"},
                            {"id": "p1", "name": "B", "partNumber": "2"}
                        ]
                    }]
                }]
            }]
        }]"#,
    );
    let service = real_service();
    let brands = service.load(&path).unwrap().brands;

    let err = service.validate(&brands).unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
    assert!(err.to_string().contains("p1"));
}

// ============================================================
// Mocked filesystem boundary
// ============================================================

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "not in mock"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

#[test]
fn given_mock_filesystem_when_loading_then_no_disk_access_needed() {
    init_test_setup();
    let path = PathBuf::from("/virtual/catalog.json");
    let mut files = HashMap::new();
    files.insert(path.clone(), SNAPSHOT.to_string());
    let service = CatalogService::new(Arc::new(MockFileSystem { files }));

    let snapshot = service.load(&path).unwrap();
    assert_eq!(snapshot.brands[0].name, "Caterpillar");
}
