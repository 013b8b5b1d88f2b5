//! Customers domain module.
//!
//! This crate contains the customer record used by the order-creation workflow,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;

pub use customer::Customer;
pub use storefront_core::CustomerId;
