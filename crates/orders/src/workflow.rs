//! The order-creation workflow.
//!
//! Orchestrates the three collaborator ports: resolve the customer, bulk-read
//! and validate the requested products, persist the order aggregate, then
//! commit the stock decrements. Steps up to persistence are pure validation
//! and leave no side effects behind on failure.

use std::collections::HashMap;

use thiserror::Error;

use storefront_catalog::StockUpdate;
use storefront_core::{CustomerId, ProductId};

use crate::line_item::{LineItemRequest, OrderLineItem};
use crate::order::{NewOrder, Order};
use crate::ports::{CustomerLookup, OrderStore, ProductCatalog, RepositoryError};

/// Order-creation outcome taxonomy.
///
/// Callers branch on the variant; no string matching required.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The customer id does not resolve.
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// Zero products resolved, or the resolved count differs from the raw
    /// requested count.
    #[error("product not found")]
    ProductNotFound,

    /// A requested quantity exceeds the product's available stock.
    #[error("out of stock: {0}")]
    OutOfStock(ProductId),

    /// A collaborator's underlying operation failed; propagated unchanged.
    #[error("persistence failure: {0}")]
    Persistence(#[from] RepositoryError),
}

/// Creates orders against injected collaborators.
///
/// Stateless across invocations; each call is a fresh sequence of dependent
/// collaborator calls with no internal parallelism. Serialization of stock
/// updates between concurrent invocations is the catalog's responsibility
/// (see [`ProductCatalog::update_quantities`]).
pub struct OrderCreationWorkflow<C, P, S> {
    customers: C,
    catalog: P,
    orders: S,
}

impl<C, P, S> OrderCreationWorkflow<C, P, S>
where
    C: CustomerLookup,
    P: ProductCatalog,
    S: OrderStore,
{
    pub fn new(customers: C, catalog: P, orders: S) -> Self {
        Self {
            customers,
            catalog,
            orders,
        }
    }

    /// Validate and persist a new order, then commit the stock decrements.
    ///
    /// Failure semantics: validation failures (`CustomerNotFound`,
    /// `ProductNotFound`, `OutOfStock`) are reported before any mutation. A
    /// stock-update failure after the order write is surfaced as
    /// `Persistence` with the order already stored; there is no compensation
    /// at this layer.
    pub fn create_order(
        &self,
        customer_id: CustomerId,
        requested: &[LineItemRequest],
    ) -> Result<Order, OrderError> {
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(OrderError::CustomerNotFound(customer_id))?;

        let quantities = requested_quantities(requested);

        let products = self.catalog.find_all_by_id(requested)?;

        // The count is checked against the raw request list, not the
        // deduplicated map: duplicate ids in the input trip this even when
        // every distinct product exists. Known source behavior, kept.
        if products.is_empty() || products.len() != requested.len() {
            return Err(OrderError::ProductNotFound);
        }

        let mut line_items = Vec::with_capacity(products.len());
        for product in &products {
            let wanted = quantities
                .get(&product.id_typed())
                .copied()
                // A resolved product outside the request set breaks the
                // catalog contract.
                .ok_or(OrderError::ProductNotFound)?;

            if !product.can_fulfill(wanted) {
                return Err(OrderError::OutOfStock(product.id_typed()));
            }

            line_items.push(OrderLineItem::from_product(product, wanted));
        }

        // `quantity_update` already holds the post-sale absolute quantity.
        let updates: Vec<StockUpdate> = line_items
            .iter()
            .map(|line| StockUpdate::new(line.product_id, line.quantity_update))
            .collect();

        let order = self.orders.create(NewOrder::new(customer, line_items))?;

        if let Err(err) = self.catalog.update_quantities(&updates) {
            // The order is persisted but stock is untouched; surface the
            // error and let the caller deal with the inconsistency.
            tracing::warn!(
                order_id = %order.id_typed(),
                error = %err,
                "stock update failed after order persist"
            );
            return Err(OrderError::Persistence(err));
        }

        tracing::info!(
            order_id = %order.id_typed(),
            customer_id = %customer_id,
            line_items = order.line_items().len(),
            "order created"
        );

        Ok(order)
    }
}

/// Requested quantities keyed by product id.
///
/// Last write wins on duplicate ids, mirroring a map keyed by identifier.
fn requested_quantities(requested: &[LineItemRequest]) -> HashMap<ProductId, u64> {
    requested
        .iter()
        .map(|item| (item.product_id, item.quantity))
        .collect()
}
