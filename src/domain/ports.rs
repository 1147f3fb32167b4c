use super::cart::{CartLine, CartView};
use super::catalog::{Item, ItemId};
use super::money::Quantity;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the shared cart.
///
/// Every mutating method must be atomic with respect to every other one:
/// implementations serialize `add`, `remove` and `take_all` so that a merge or
/// a checkout never observes a half-applied change.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Adds `quantity` of `item`, merging into an existing line, and returns
    /// the updated lines.
    async fn add(&self, item: &Item, quantity: Quantity) -> Result<Vec<CartLine>>;
    /// Removes the line for `item_id` if present and returns the updated lines.
    async fn remove(&self, item_id: ItemId) -> Result<Vec<CartLine>>;
    async fn snapshot(&self) -> Result<Vec<CartLine>>;
    /// Empties the store and returns what it held with its total, in one
    /// step. If the total cannot be computed the store is left untouched.
    async fn take_all(&self) -> Result<CartView>;
}

pub type CartStoreBox = Box<dyn CartStore>;
