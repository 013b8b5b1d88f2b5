use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{Entity, OrderId};
use storefront_customers::Customer;

use crate::line_item::OrderLineItem;

/// A not-yet-persisted order aggregate: the customer plus the enriched line
/// items, written to the store as one logical unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub line_items: Vec<OrderLineItem>,
}

impl NewOrder {
    pub fn new(customer: Customer, line_items: Vec<OrderLineItem>) -> Self {
        Self {
            customer,
            line_items,
        }
    }
}

/// Aggregate: a persisted order.
///
/// Created exactly once per successful workflow invocation; immutable from the
/// workflow's perspective afterwards. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    line_items: Vec<OrderLineItem>,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer: Customer,
        line_items: Vec<OrderLineItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer,
            line_items,
            created_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
