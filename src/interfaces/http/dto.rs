use serde::Deserialize;
use serde_json::Value;

use crate::domain::catalog::ItemId;
use crate::error::{Result, StorefrontError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ItemId,
    /// Kept as raw JSON so that strings, fractions and a missing field all
    /// surface as an invalid quantity rather than a malformed body.
    #[serde(default)]
    pub qty: Value,
}

impl AddToCartRequest {
    /// Reads `qty` as a whole number. Integral floats such as `2.0` are
    /// accepted; range checks are left to `Quantity`.
    pub fn quantity(&self) -> Result<i64> {
        let whole = match &self.qty {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        };
        whole.ok_or_else(|| {
            StorefrontError::InvalidQuantity(format!(
                "quantity must be a whole number, got {}",
                self.qty
            ))
        })
    }
}

/// Body of a checkout request. Clients send their view of the cart, but the
/// engine always recomputes from its own store, so the contents are only
/// inspected for logging.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub cart_items: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: &str) -> AddToCartRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_integer_quantity() {
        let req = request(r#"{"productId": 1, "qty": 3}"#);
        assert_eq!(req.product_id, 1);
        assert_eq!(req.quantity().unwrap(), 3);
    }

    #[test]
    fn test_integral_float_quantity() {
        assert_eq!(request(r#"{"productId": 1, "qty": 2.0}"#).quantity().unwrap(), 2);
    }

    #[test]
    fn test_non_integer_quantities_rejected() {
        for body in [
            r#"{"productId": 1, "qty": 1.5}"#,
            r#"{"productId": 1, "qty": "a"}"#,
            r#"{"productId": 1, "qty": null}"#,
            r#"{"productId": 1}"#,
            r#"{"productId": 1, "qty": 1e30}"#,
        ] {
            assert!(
                matches!(
                    request(body).quantity(),
                    Err(StorefrontError::InvalidQuantity(_))
                ),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn test_checkout_body_optional_items() {
        let req: CheckoutRequest = serde_json::from_str("{}").unwrap();
        assert!(req.cart_items.is_none());
    }
}
