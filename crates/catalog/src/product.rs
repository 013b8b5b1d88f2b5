use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

/// Entity: Product.
///
/// Owned by the catalog. The order-creation workflow reads the current stock
/// quantity and requests absolute-quantity updates; it never mutates a product
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Price in smallest currency unit (e.g., cents). Carried as a snapshot;
    /// this workspace performs no pricing arithmetic.
    unit_price: u64,
    /// Current stock quantity. `u64` keeps the non-negative invariant in the type.
    quantity: u64,
}

impl Product {
    /// Build a validated product record.
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        unit_price: u64,
        quantity: u64,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            sku,
            name,
            unit_price,
            quantity,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Whether the current stock covers a requested quantity.
    pub fn can_fulfill(&self, requested: u64) -> bool {
        requested <= self.quantity
    }

    /// Copy of this product with a new absolute stock quantity.
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
