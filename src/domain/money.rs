use crate::error::StorefrontError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary value backed by `rust_decimal::Decimal`.
///
/// All cart arithmetic goes through this type so totals stay exact. On the wire
/// it is rendered as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, StorefrontError> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            StorefrontError::ValidationError(format!("{} + {} overflows", self.0, rhs.0))
        })
    }

    pub fn checked_mul(self, quantity: Quantity) -> Result<Self, StorefrontError> {
        self.0
            .checked_mul(Decimal::from(quantity.value()))
            .map(Self)
            .ok_or_else(|| {
                StorefrontError::ValidationError(format!(
                    "{} x {} overflows",
                    self.0,
                    quantity.value()
                ))
            })
    }
}

/// A strictly positive number of units of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> Result<Self, StorefrontError> {
        if value <= 0 {
            return Err(StorefrontError::InvalidQuantity(format!(
                "quantity must be positive, got {value}"
            )));
        }
        u32::try_from(value).map(Self).map_err(|_| {
            StorefrontError::InvalidQuantity(format!("quantity {value} is too large"))
        })
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Merges two quantities for the same item.
    pub fn checked_add(self, rhs: Self) -> Result<Self, StorefrontError> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            StorefrontError::InvalidQuantity(format!(
                "adding {} to {} overflows the line quantity",
                rhs.0, self.0
            ))
        })
    }
}

impl TryFrom<i64> for Quantity {
    type Error = StorefrontError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}
