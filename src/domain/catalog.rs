use super::money::Money;
use crate::error::{Result, StorefrontError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ItemId = u32;

/// A purchasable product. Items are created once when the catalog is built and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price: Money::new(price),
        }
    }
}

/// The fixed set of items the store sells.
///
/// Insertion order is preserved for listing; lookups go through an id index.
/// There are no mutation operations, so a `Catalog` can be shared freely
/// behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and negative prices.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.price.is_negative() {
                return Err(StorefrontError::ValidationError(format!(
                    "Product {} has a negative price",
                    item.id
                )));
            }
            if index.insert(item.id, position).is_some() {
                return Err(StorefrontError::ValidationError(format!(
                    "Duplicate product id {}",
                    item.id
                )));
            }
        }
        Ok(Self { items, index })
    }

    /// The demo catalog served when no catalog file is configured.
    pub fn demo() -> Result<Self> {
        Self::new(vec![
            Item::new(1, "iPhone 15 Pro", Decimal::from(1299)),
            Item::new(2, "AirPods Pro", Decimal::from(249)),
            Item::new(3, "MacBook Air", Decimal::from(999)),
            Item::new(4, "Apple Watch", Decimal::from(399)),
            Item::new(5, "iPad Pro", Decimal::from(1099)),
        ])
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn find_by_id(&self, id: ItemId) -> Result<&Item> {
        self.index
            .get(&id)
            .map(|&position| &self.items[position])
            .ok_or(StorefrontError::ItemNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
