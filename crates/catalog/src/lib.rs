//! Product catalog domain module.
//!
//! This crate contains the product record and the stock-update instruction used
//! by the order-creation workflow, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod product;
pub mod stock;

pub use product::Product;
pub use stock::StockUpdate;
pub use storefront_core::ProductId;
