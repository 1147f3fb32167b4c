use crate::domain::cart::{Cart, CartLine, CartView};
use crate::domain::catalog::{Item, ItemId};
use crate::domain::money::Quantity;
use crate::domain::ports::CartStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A thread-safe in-memory cart.
///
/// Uses a single `Arc<Mutex<Cart>>`: reads and writes all take the same lock,
/// so every operation, including the read-then-clear of a checkout, is
/// applied as one step. Clones share the same cart.
#[derive(Default, Clone)]
pub struct InMemoryCartStore {
    cart: Arc<Mutex<Cart>>,
}

impl InMemoryCartStore {
    /// Creates a new, empty in-memory cart store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn add(&self, item: &Item, quantity: Quantity) -> Result<Vec<CartLine>> {
        let mut cart = self.cart.lock().await;
        cart.add(item, quantity)?;
        Ok(cart.lines().to_vec())
    }

    async fn remove(&self, item_id: ItemId) -> Result<Vec<CartLine>> {
        let mut cart = self.cart.lock().await;
        cart.remove(item_id);
        Ok(cart.lines().to_vec())
    }

    async fn snapshot(&self) -> Result<Vec<CartLine>> {
        let cart = self.cart.lock().await;
        Ok(cart.lines().to_vec())
    }

    async fn take_all(&self) -> Result<CartView> {
        let mut cart = self.cart.lock().await;
        cart.take()
    }
}
