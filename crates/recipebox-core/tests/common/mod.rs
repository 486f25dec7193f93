use recipebox_core::{Cookbook, CookbookBuilder};
use tempfile::TempDir;

/// Helper function to create a cookbook backed by a temporary database
pub async fn create_test_cookbook() -> (TempDir, Cookbook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let cookbook = CookbookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create cookbook");
    (temp_dir, cookbook)
}
