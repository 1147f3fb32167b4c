use rust_decimal_macros::dec;
use storefront::domain::catalog::Item;
use storefront::domain::money::Quantity;
use storefront::domain::ports::CartStoreBox;
use storefront::infrastructure::in_memory::InMemoryCartStore;

#[tokio::test]
async fn test_store_as_trait_object() {
    let shared = InMemoryCartStore::new();
    let writer: CartStoreBox = Box::new(shared.clone());
    let reader: CartStoreBox = Box::new(shared);

    let item = Item::new(9, "Charging Cable", dec!(19.99));

    // Verify Send + Sync by spawning tasks
    let handle = tokio::spawn(async move {
        writer.add(&item, Quantity::new(2).unwrap()).await.unwrap()
    });
    let written = handle.await.unwrap();
    assert_eq!(written.len(), 1);

    let handle = tokio::spawn(async move { reader.snapshot().await.unwrap() });
    let seen = handle.await.unwrap();
    assert_eq!(seen, written);
    assert_eq!(seen[0].quantity.value(), 2);
}
