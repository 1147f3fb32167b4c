use super::cart::{CartLine, CartView};
use super::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Record of a completed checkout. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    total: Money,
    issued_at: DateTime<Utc>,
    items: Vec<CartLine>,
}

impl Receipt {
    /// Issues a receipt for the checked-out cart contents. The total is the
    /// one computed from those lines when they were taken from the cart.
    pub fn issue(contents: CartView, issued_at: DateTime<Utc>) -> Self {
        let total = contents.total();
        Self {
            total,
            issued_at,
            items: contents.into_items(),
        }
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn items(&self) -> &[CartLine] {
        &self.items
    }
}
