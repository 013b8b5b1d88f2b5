use serde::{Deserialize, Serialize};

use storefront_core::{ProductId, ValueObject};

/// Instruction sent to the catalog to set a product's stock to a new absolute
/// quantity. Produced by the order-creation workflow after a sale passes
/// validation; applied by the catalog as one batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub product_id: ProductId,
    /// New absolute stock quantity (not a delta).
    pub quantity: u64,
}

impl StockUpdate {
    pub fn new(product_id: ProductId, quantity: u64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

impl ValueObject for StockUpdate {}
