use crate::domain::cart::{CartLine, CartView};
use crate::domain::catalog::{Catalog, Item, ItemId};
use crate::domain::money::Quantity;
use crate::domain::ports::CartStoreBox;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The main entry point for storefront operations.
///
/// `StorefrontEngine` pairs the read-only catalog with the cart store. Catalog
/// reads never lock; every cart operation is delegated to the store, which
/// applies it atomically.
///
/// There is a single cart for the whole process. Any caller may check out
/// items another caller added.
pub struct StorefrontEngine {
    catalog: Arc<Catalog>,
    cart_store: CartStoreBox,
}

impl StorefrontEngine {
    /// Creates a new `StorefrontEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The items available for purchase.
    /// * `cart_store` - The store holding the shared cart.
    pub fn new(catalog: Arc<Catalog>, cart_store: CartStoreBox) -> Self {
        Self {
            catalog,
            cart_store,
        }
    }

    pub fn list_products(&self) -> &[Item] {
        self.catalog.list()
    }

    pub fn find_product(&self, id: ItemId) -> Result<&Item> {
        self.catalog.find_by_id(id)
    }

    /// Returns the current cart lines together with their total.
    pub async fn cart(&self) -> Result<CartView> {
        let lines = self.cart_store.snapshot().await?;
        debug!(lines = lines.len(), "cart snapshot");
        CartView::try_from(lines)
    }

    /// Adds `quantity` units of product `item_id` to the cart.
    ///
    /// Fails with `ItemNotFound` for ids outside the catalog and with
    /// `InvalidQuantity` for non-positive quantities or when the cart total
    /// would overflow. The cart is not touched on any error path.
    pub async fn add_to_cart(&self, item_id: ItemId, quantity: i64) -> Result<Vec<CartLine>> {
        let item = self.catalog.find_by_id(item_id).inspect_err(|_| {
            warn!(item_id, "add to cart rejected: unknown product");
        })?;
        let quantity = Quantity::new(quantity).inspect_err(|e| {
            warn!(item_id, error = %e, "add to cart rejected");
        })?;

        let lines = self.cart_store.add(item, quantity).await?;
        info!(item_id, qty = quantity.value(), lines = lines.len(), "added to cart");
        Ok(lines)
    }

    /// Removes the whole line for `item_id`. Unknown ids are a no-op.
    pub async fn remove_from_cart(&self, item_id: ItemId) -> Result<Vec<CartLine>> {
        let lines = self.cart_store.remove(item_id).await?;
        info!(item_id, lines = lines.len(), "removed from cart");
        Ok(lines)
    }

    /// Empties the cart and issues a receipt for what it held.
    ///
    /// The total is always recomputed from the store's own lines, before the
    /// cart is cleared. An empty cart checks out to a zero receipt.
    pub async fn checkout(&self) -> Result<Receipt> {
        let contents = self.cart_store.take_all().await?;
        let receipt = Receipt::issue(contents, Utc::now());
        info!(
            total = %receipt.total().value(),
            lines = receipt.items().len(),
            "checkout complete"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::error::StorefrontError;
    use crate::infrastructure::in_memory::InMemoryCartStore;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn engine() -> StorefrontEngine {
        StorefrontEngine::new(
            Arc::new(Catalog::demo().unwrap()),
            Box::new(InMemoryCartStore::new()),
        )
    }

    #[tokio::test]
    async fn test_checkout_scenario() {
        let engine = engine();
        engine.add_to_cart(1, 1).await.unwrap();
        engine.add_to_cart(2, 2).await.unwrap();

        let cart = engine.cart().await.unwrap();
        assert_eq!(cart.total(), Money::new(dec!(1797)));

        let receipt = engine.checkout().await.unwrap();
        assert_eq!(receipt.total(), Money::new(dec!(1797)));
        assert_eq!(receipt.items().len(), 2);

        let cart = engine.cart().await.unwrap();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_product_leaves_cart_unchanged() {
        let engine = engine();
        engine.add_to_cart(3, 1).await.unwrap();
        let before = engine.cart().await.unwrap();

        let result = engine.add_to_cart(999, 1).await;
        assert!(matches!(result, Err(StorefrontError::ItemNotFound(999))));
        assert_eq!(engine.cart().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_invalid_quantity_leaves_cart_unchanged() {
        let engine = engine();
        for qty in [0, -1] {
            let result = engine.add_to_cart(1, qty).await;
            assert!(matches!(result, Err(StorefrontError::InvalidQuantity(_))));
        }
        assert!(engine.cart().await.unwrap().items().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let engine = engine();
        let before = Utc::now();
        let receipt = engine.checkout().await.unwrap();
        assert_eq!(receipt.total(), Money::ZERO);
        assert!(receipt.items().is_empty());
        assert!(receipt.issued_at() >= before);
        assert!(receipt.issued_at() <= Utc::now());
    }

    #[tokio::test]
    async fn test_overflowing_add_keeps_checkout_intact() {
        let catalog = Catalog::new(vec![
            Item::new(1, "Yacht", dec!(10000000000000000000000000000)),
            Item::new(2, "Anchor", Decimal::MAX),
        ])
        .unwrap();
        let engine = StorefrontEngine::new(Arc::new(catalog), Box::new(InMemoryCartStore::new()));

        engine.add_to_cart(1, 1).await.unwrap();
        for (item_id, qty) in [(1, 10), (1, 7), (2, 1)] {
            let result = engine.add_to_cart(item_id, qty).await;
            assert!(matches!(result, Err(StorefrontError::InvalidQuantity(_))));
        }

        let cart = engine.cart().await.unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity.value(), 1);

        let receipt = engine.checkout().await.unwrap();
        assert_eq!(
            receipt.total(),
            Money::new(dec!(10000000000000000000000000000))
        );
        assert!(engine.cart().await.unwrap().items().is_empty());
    }

    #[tokio::test]
    async fn test_remove_twice() {
        let engine = engine();
        engine.add_to_cart(5, 1).await.unwrap();

        assert!(engine.remove_from_cart(5).await.unwrap().is_empty());
        assert!(engine.remove_from_cart(5).await.unwrap().is_empty());
    }
}
