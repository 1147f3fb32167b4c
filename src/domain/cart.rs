use super::catalog::{Item, ItemId};
use super::money::{Money, Quantity};
use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};

/// One entry of the cart: a frozen copy of the catalog item plus how many
/// units were selected.
///
/// Serialized flat, e.g. `{"id":1,"name":"iPhone 15 Pro","price":1299.0,"qty":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
}

impl CartLine {
    pub fn new(item: Item, quantity: Quantity) -> Self {
        Self { item, quantity }
    }

    pub fn line_total(&self) -> Result<Money> {
        self.item.price.checked_mul(self.quantity)
    }
}

/// Sum of `price * quantity` over all lines. Zero for no lines.
pub fn total(lines: &[CartLine]) -> Result<Money> {
    lines
        .iter()
        .try_fold(Money::ZERO, |sum, line| sum.checked_add(line.line_total()?))
}

/// The cart contents, ordered by first add.
///
/// Holds at most one line per item id: adding an item that is already present
/// merges into the existing line. The total of a `Cart` always fits in a
/// `Money`; adds that would break this are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`, merging with an existing line.
    ///
    /// The cart is left untouched if the merged quantity or the resulting
    /// cart total would overflow.
    pub fn add(&mut self, item: &Item, quantity: Quantity) -> Result<()> {
        let position = self.lines.iter().position(|l| l.item.id == item.id);
        let merged = match position {
            Some(i) => self.lines[i].quantity.checked_add(quantity)?,
            None => quantity,
        };

        let overflow = |_| {
            StorefrontError::InvalidQuantity(format!(
                "adding {} of product {} overflows the cart total",
                quantity.value(),
                item.id
            ))
        };
        let mut new_total = item.price.checked_mul(merged).map_err(overflow)?;
        for line in self.lines.iter().filter(|l| l.item.id != item.id) {
            new_total = line
                .line_total()
                .and_then(|line_total| new_total.checked_add(line_total))
                .map_err(overflow)?;
        }

        match position {
            Some(i) => self.lines[i].quantity = merged,
            None => self.lines.push(CartLine::new(item.clone(), quantity)),
        }
        Ok(())
    }

    /// Drops the line for `item_id`. Returns whether a line was removed;
    /// removing an absent id is not an error.
    pub fn remove(&mut self, item_id: ItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item.id != item_id);
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Result<Money> {
        total(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empties the cart, handing back its lines and their total.
    ///
    /// The total is computed first: if it fails, the cart is not cleared.
    pub fn take(&mut self) -> Result<CartView> {
        let total = self.total()?;
        let items = std::mem::take(&mut self.lines);
        Ok(CartView { items, total })
    }
}

/// A set of cart lines with their total, as returned by "get cart" and
/// consumed by checkout. Only built by computing the total from the lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    items: Vec<CartLine>,
    total: Money,
}

impl CartView {
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn into_items(self) -> Vec<CartLine> {
        self.items
    }
}

impl TryFrom<Vec<CartLine>> for CartView {
    type Error = StorefrontError;

    fn try_from(items: Vec<CartLine>) -> Result<Self> {
        let total = total(&items)?;
        Ok(Self { items, total })
    }
}
