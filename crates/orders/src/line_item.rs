use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{ProductId, ValueObject};

/// One product/quantity pair requested by the caller.
///
/// Duplicate product ids within one request are collapsed last-write-wins when
/// the workflow builds its quantity map.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub product_id: ProductId,
    /// Requested quantity. Zero is accepted and flows through unchecked.
    pub quantity: u64,
}

impl LineItemRequest {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

impl ValueObject for LineItemRequest {}

/// One line of an order: the product snapshot at sale time, the purchased
/// quantity, and the resulting post-sale stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    /// Price in smallest currency unit, carried as a snapshot.
    pub unit_price: u64,
    pub quantity: u64,
    /// Stock remaining after this sale (`stock − quantity` at enrichment time).
    pub quantity_update: u64,
}

impl OrderLineItem {
    /// Enrich a resolved product into a line item.
    ///
    /// Callers must have verified `product.can_fulfill(quantity)` first; the
    /// post-sale stock is computed as `stock − quantity`.
    pub fn from_product(product: &Product, quantity: u64) -> Self {
        Self {
            product_id: product.id_typed(),
            sku: product.sku().to_string(),
            name: product.name().to_string(),
            unit_price: product.unit_price(),
            quantity,
            quantity_update: product.quantity() - quantity,
        }
    }
}

impl ValueObject for OrderLineItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_product_snapshots_product_fields() {
        let product =
            Product::new(ProductId::new(), "SKU-001", "Test Product", 1999, 10).unwrap();

        let line = OrderLineItem::from_product(&product, 3);

        assert_eq!(line.product_id, product.id_typed());
        assert_eq!(line.sku, "SKU-001");
        assert_eq!(line.name, "Test Product");
        assert_eq!(line.unit_price, 1999);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.quantity_update, 7);
    }

    #[test]
    fn from_product_with_full_stock_purchase_leaves_zero() {
        let product =
            Product::new(ProductId::new(), "SKU-001", "Test Product", 1999, 5).unwrap();

        let line = OrderLineItem::from_product(&product, 5);
        assert_eq!(line.quantity_update, 0);
    }
}
