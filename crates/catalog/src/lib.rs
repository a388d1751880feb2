//! Catalog domain module.
//!
//! This crate contains the product stock record consumed by the reorder
//! rules, implemented purely as deterministic domain data (no IO, no HTTP,
//! no storage).

pub mod product;

pub use product::ProductStock;
