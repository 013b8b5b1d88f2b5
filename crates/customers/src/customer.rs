use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, DomainError, DomainResult, Entity};

/// Entity: Customer.
///
/// The order-creation workflow only cares about existence; the remaining fields
/// are the snapshot a customer record carries when it is embedded in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl Customer {
    /// Build a validated customer record.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            email,
            created_at,
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer_id() -> CustomerId {
        CustomerId::new()
    }

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn new_builds_customer_with_given_fields() {
        let id = test_customer_id();
        let customer =
            Customer::new(id, "Ada Lovelace", "ada@example.com", test_time()).unwrap();

        assert_eq!(customer.id_typed(), id);
        assert_eq!(customer.name(), "Ada Lovelace");
        assert_eq!(customer.email(), "ada@example.com");
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = Customer::new(test_customer_id(), "   ", "ada@example.com", test_time())
            .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_rejects_empty_email() {
        let err =
            Customer::new(test_customer_id(), "Ada Lovelace", "", test_time()).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty email"),
        }
    }

    #[test]
    fn entity_id_matches_typed_id() {
        let id = test_customer_id();
        let customer = Customer::new(id, "Ada Lovelace", "ada@example.com", test_time()).unwrap();
        assert_eq!(*Entity::id(&customer), id);
    }
}
