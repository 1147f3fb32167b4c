use crate::domain::catalog::{Catalog, Item, ItemId};
use crate::error::{Result, StorefrontError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: ItemId,
    name: String,
    price: Decimal,
}

impl From<CatalogRecord> for Item {
    fn from(record: CatalogRecord) -> Self {
        Item::new(record.id, record.name, record.price)
    }
}

/// Reads catalog items from a CSV source with an `id,name,price` header.
///
/// Whitespace around fields is trimmed, so hand-edited files with padded
/// columns load fine.
pub struct CatalogReader<R: Read> {
    reader: csv::Reader<R>,
}

impl CatalogReader<File> {
    /// Opens the catalog file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> CatalogReader<R> {
    /// Creates a new `CatalogReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes items.
    pub fn items(self) -> impl Iterator<Item = Result<Item>> {
        self.reader
            .into_deserialize::<CatalogRecord>()
            .map(|result| result.map(Item::from).map_err(StorefrontError::from))
    }

    /// Reads every row and builds a catalog. The first bad row fails the
    /// whole load.
    pub fn into_catalog(self) -> Result<Catalog> {
        let items = self.items().collect::<Result<Vec<_>>>()?;
        Catalog::new(items)
    }
}
