#![allow(dead_code)]

use std::io::Error;
use std::path::Path;
use std::sync::Arc;

use storefront::application::engine::StorefrontEngine;
use storefront::domain::catalog::Catalog;
use storefront::infrastructure::in_memory::InMemoryCartStore;

pub fn default_engine() -> StorefrontEngine {
    StorefrontEngine::new(
        Arc::new(Catalog::demo().unwrap()),
        Box::new(InMemoryCartStore::new()),
    )
}

/// Writes a catalog with ids `1..=rows`, each priced at `id + 0.99`.
pub fn generate_catalog_csv(path: &Path, rows: u32) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    wtr.write_record(["id", "name", "price"])?;

    for i in 1..=rows {
        wtr.write_record([
            i.to_string(),
            format!("Product {i}"),
            format!("{i}.99"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
