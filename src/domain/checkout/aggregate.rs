use serde::{Deserialize, Serialize};

use super::value_objects::OrderItem;
use super::errors::OrderError;

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderFields")]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    /// Validate business rules
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyId);
        }
        if self.customer_id.is_empty() {
            return Err(OrderError::EmptyCustomerId);
        }
        if self.items.is_empty() {
            return Err(OrderError::EmptyItems);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity() <= 0) {
            return Err(OrderError::InvalidQuantity(item.quantity()));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if item.quantity() <= 0 {
            return Err(OrderError::InvalidQuantity(item.quantity()));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

#[derive(Deserialize)]
struct OrderFields {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl TryFrom<OrderFields> for Order {
    type Error = OrderError;

    fn try_from(fields: OrderFields) -> Result<Self, Self::Error> {
        Self::new(fields.id, fields.customer_id, fields.items)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
