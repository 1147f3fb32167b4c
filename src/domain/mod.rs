//! Domain layer: the catalog, the cart and the receipts it produces.
//!
//! Nothing in here performs I/O. The only seam to the outside world is
//! [`ports::CartStore`], implemented by the infrastructure layer.

pub mod cart;
pub mod catalog;
pub mod money;
pub mod ports;
pub mod receipt;
