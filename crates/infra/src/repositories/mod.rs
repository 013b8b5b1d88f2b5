//! Persistence adapters for the order workflow's collaborator ports.

pub mod in_memory;

pub use in_memory::{InMemoryCustomerDirectory, InMemoryOrderStore, InMemoryProductCatalog};
