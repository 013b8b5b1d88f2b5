//! Orders domain module: the order aggregate and the order-creation workflow.
//!
//! The workflow validates a customer and a requested set of product/quantity
//! pairs against its collaborators, persists the order aggregate, and commits
//! the resulting stock decrements. Collaborators are injected through the
//! traits in [`ports`].

pub mod line_item;
pub mod order;
pub mod ports;
pub mod workflow;

pub use line_item::{LineItemRequest, OrderLineItem};
pub use order::{NewOrder, Order};
pub use ports::{CustomerLookup, OrderStore, ProductCatalog, RepositoryError};
pub use storefront_core::OrderId;
pub use workflow::{OrderCreationWorkflow, OrderError};
