//! Application layer containing the storefront orchestration.
//!
//! This module defines the `StorefrontEngine` which acts as the primary entry
//! point for catalog queries, cart mutations and checkout.

pub mod engine;
