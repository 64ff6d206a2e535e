use async_trait::async_trait;
use std::path::Path;

/// Tables written by the import, children first so they can be cleared
/// without violating foreign keys.
pub const IMPORT_TABLES: [&str; 10] = [
    "product_properties",
    "documents",
    "images",
    "prices",
    "stock",
    "variants",
    "products",
    "units",
    "producers",
    "categories",
];

#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Current on-disk size of the database in bytes.
    async fn database_size(&self) -> Result<u64, anyhow::Error>;

    /// Writes every row of `table` to `dest` as CSV, returning bytes written.
    async fn backup_table(&self, table: &str, dest: &Path) -> Result<u64, anyhow::Error>;

    async fn clear_tables(&self, tables: &[&str]) -> Result<(), anyhow::Error>;
}
