//! Collaborator interfaces (ports) the order-creation workflow depends on.
//!
//! The workflow is wired with these three traits through its constructor; it
//! never reaches for a global registry. Implementations live in
//! `storefront-infra` (in-memory, for tests/dev) or behind a real persistence
//! boundary.

use std::sync::Arc;

use thiserror::Error;

use storefront_catalog::{Product, StockUpdate};
use storefront_core::CustomerId;
use storefront_customers::Customer;

use crate::line_item::LineItemRequest;
use crate::order::{NewOrder, Order};

/// Infrastructure failure surfaced by a collaborator.
///
/// These are storage-level faults (backend unavailable, key collisions), not
/// workflow outcomes; the workflow propagates them unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage backend failure: {0}")]
    Backend(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),
}

/// Resolves a customer identifier to a customer record.
pub trait CustomerLookup: Send + Sync {
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
}

/// Read and update access to the product catalog.
pub trait ProductCatalog: Send + Sync {
    /// Bulk read for the requested product/quantity pairs.
    ///
    /// Returns only products that exist; the result may be shorter than the
    /// request and carries no particular pairing with it.
    fn find_all_by_id(
        &self,
        requested: &[LineItemRequest],
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Apply a batch of absolute stock quantities.
    ///
    /// Implementations must serialize updates per product (compare-and-swap,
    /// atomic write, or per-key locking); this workflow performs a
    /// read-modify-write and relies on the catalog to prevent lost updates
    /// across concurrent invocations.
    fn update_quantities(&self, updates: &[StockUpdate]) -> Result<(), RepositoryError>;
}

/// Persists order aggregates.
pub trait OrderStore: Send + Sync {
    /// Persist a new order as one aggregate write and return the stored order
    /// (with its assigned identifier and timestamp).
    fn create(&self, order: NewOrder) -> Result<Order, RepositoryError>;
}

impl<C> CustomerLookup for Arc<C>
where
    C: CustomerLookup + ?Sized,
{
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_by_id(id)
    }
}

impl<P> ProductCatalog for Arc<P>
where
    P: ProductCatalog + ?Sized,
{
    fn find_all_by_id(
        &self,
        requested: &[LineItemRequest],
    ) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all_by_id(requested)
    }

    fn update_quantities(&self, updates: &[StockUpdate]) -> Result<(), RepositoryError> {
        (**self).update_quantities(updates)
    }
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        (**self).create(order)
    }
}
