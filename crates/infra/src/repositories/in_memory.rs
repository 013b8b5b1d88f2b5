use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use storefront_catalog::{Product, StockUpdate};
use storefront_core::{CustomerId, OrderId, ProductId};
use storefront_customers::Customer;
use storefront_orders::{
    CustomerLookup, LineItemRequest, NewOrder, Order, OrderStore, ProductCatalog,
    RepositoryError,
};

fn poisoned() -> RepositoryError {
    RepositoryError::Backend("lock poisoned".to_string())
}

/// In-memory customer directory.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer. Fails on an already-registered id.
    pub fn insert(&self, customer: Customer) -> Result<(), RepositoryError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        let id = customer.id_typed();
        if customers.contains_key(&id) {
            return Err(RepositoryError::DuplicateKey(format!("customer {id}")));
        }
        customers.insert(id, customer);
        Ok(())
    }
}

impl CustomerLookup for InMemoryCustomerDirectory {
    fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let customers = self.customers.read().map_err(|_| poisoned())?;
        Ok(customers.get(&id).cloned())
    }
}

/// In-memory product catalog.
///
/// All mutations go through one `RwLock`, so individual reads and batch
/// updates are serialized; the read-modify-write window between a workflow's
/// bulk read and its stock update is not closed here (see the port contract).
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product. Fails on an already-registered id.
    pub fn insert(&self, product: Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        let id = product.id_typed();
        if products.contains_key(&id) {
            return Err(RepositoryError::DuplicateKey(format!("product {id}")));
        }
        products.insert(id, product);
        Ok(())
    }

    /// Current stock for a product (test/dev inspection).
    pub fn stock_of(&self, id: ProductId) -> Option<u64> {
        let products = self.products.read().ok()?;
        products.get(&id).map(Product::quantity)
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn find_all_by_id(
        &self,
        requested: &[LineItemRequest],
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().map_err(|_| poisoned())?;

        // One product per distinct requested id, in request order.
        let mut seen = Vec::with_capacity(requested.len());
        let mut found = Vec::with_capacity(requested.len());
        for item in requested {
            if seen.contains(&item.product_id) {
                continue;
            }
            seen.push(item.product_id);
            if let Some(product) = products.get(&item.product_id) {
                found.push(product.clone());
            }
        }

        Ok(found)
    }

    fn update_quantities(&self, updates: &[StockUpdate]) -> Result<(), RepositoryError> {
        let mut products = self.products.write().map_err(|_| poisoned())?;

        // Validate the whole batch before applying any of it.
        for update in updates {
            if !products.contains_key(&update.product_id) {
                return Err(RepositoryError::Backend(format!(
                    "unknown product: {}",
                    update.product_id
                )));
            }
        }

        for update in updates {
            if let Some(product) = products.get_mut(&update.product_id) {
                *product = product.with_quantity(update.quantity);
            }
        }

        Ok(())
    }
}

/// In-memory order store.
///
/// Assigns the order id (UUIDv7) and `created_at` at persist time, the way the
/// real persistence layer would on insert.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: OrderId) -> Option<Order> {
        let orders = self.orders.read().ok()?;
        orders.get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.orders.read().map(|orders| orders.len()).unwrap_or(0)
    }
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;

        let stored = Order::new(
            OrderId::new(),
            order.customer,
            order.line_items,
            Utc::now(),
        );
        orders.insert(stored.id_typed(), stored.clone());

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Customer {
        Customer::new(
            CustomerId::new(),
            "Ada Lovelace",
            "ada@example.com",
            Utc::now(),
        )
        .unwrap()
    }

    fn test_product(quantity: u64) -> Product {
        Product::new(ProductId::new(), "SKU-001", "Test Product", 1999, quantity).unwrap()
    }

    #[test]
    fn directory_insert_then_find_round_trips() {
        let directory = InMemoryCustomerDirectory::new();
        let customer = test_customer();
        directory.insert(customer.clone()).unwrap();

        let found = directory.find_by_id(customer.id_typed()).unwrap();
        assert_eq!(found, Some(customer));
    }

    #[test]
    fn directory_rejects_duplicate_customer_id() {
        let directory = InMemoryCustomerDirectory::new();
        let customer = test_customer();
        directory.insert(customer.clone()).unwrap();

        let err = directory.insert(customer).unwrap_err();
        match err {
            RepositoryError::DuplicateKey(_) => {}
            _ => panic!("Expected DuplicateKey error"),
        }
    }

    #[test]
    fn directory_misses_unknown_customer() {
        let directory = InMemoryCustomerDirectory::new();
        assert_eq!(directory.find_by_id(CustomerId::new()).unwrap(), None);
    }

    #[test]
    fn catalog_resolves_only_existing_products_in_request_order() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = test_product(10);
        let p2 = Product::new(ProductId::new(), "SKU-002", "Other Product", 999, 5).unwrap();
        catalog.insert(p1.clone()).unwrap();
        catalog.insert(p2.clone()).unwrap();

        let found = catalog
            .find_all_by_id(&[
                LineItemRequest::new(p2.id_typed(), 1),
                LineItemRequest::new(ProductId::new(), 1),
                LineItemRequest::new(p1.id_typed(), 1),
            ])
            .unwrap();

        assert_eq!(found, vec![p2, p1]);
    }

    #[test]
    fn catalog_resolves_duplicate_requested_ids_once() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = test_product(10);
        catalog.insert(p1.clone()).unwrap();

        let found = catalog
            .find_all_by_id(&[
                LineItemRequest::new(p1.id_typed(), 1),
                LineItemRequest::new(p1.id_typed(), 4),
            ])
            .unwrap();

        assert_eq!(found, vec![p1]);
    }

    #[test]
    fn catalog_applies_absolute_quantity_updates() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = test_product(10);
        catalog.insert(p1.clone()).unwrap();

        catalog
            .update_quantities(&[StockUpdate::new(p1.id_typed(), 7)])
            .unwrap();

        assert_eq!(catalog.stock_of(p1.id_typed()), Some(7));
    }

    #[test]
    fn catalog_rejects_update_batch_with_unknown_product_without_applying_any() {
        let catalog = InMemoryProductCatalog::new();
        let p1 = test_product(10);
        catalog.insert(p1.clone()).unwrap();

        let err = catalog
            .update_quantities(&[
                StockUpdate::new(p1.id_typed(), 7),
                StockUpdate::new(ProductId::new(), 3),
            ])
            .unwrap_err();

        match err {
            RepositoryError::Backend(msg) => assert!(msg.contains("unknown product")),
            _ => panic!("Expected Backend error"),
        }
        assert_eq!(catalog.stock_of(p1.id_typed()), Some(10));
    }

    #[test]
    fn store_assigns_id_and_timestamp_on_create() {
        let store = InMemoryOrderStore::new();
        let customer = test_customer();
        let product = test_product(10);
        let line = storefront_orders::OrderLineItem::from_product(&product, 3);

        let stored = store
            .create(NewOrder::new(customer.clone(), vec![line.clone()]))
            .unwrap();

        assert_eq!(stored.customer(), &customer);
        assert_eq!(stored.line_items(), &[line]);
        assert_eq!(store.get(stored.id_typed()), Some(stored));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn store_creates_distinct_orders_for_identical_payloads() {
        let store = InMemoryOrderStore::new();
        let customer = test_customer();
        let product = test_product(10);
        let line = storefront_orders::OrderLineItem::from_product(&product, 3);
        let payload = NewOrder::new(customer, vec![line]);

        let first = store.create(payload.clone()).unwrap();
        let second = store.create(payload).unwrap();

        assert_ne!(first.id_typed(), second.id_typed());
        assert_eq!(store.count(), 2);
    }
}
