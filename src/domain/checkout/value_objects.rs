use serde::{Deserialize, Serialize};

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// Line of an order: a product snapshot (name, price) and a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OrderItemFields")]
pub struct OrderItem {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<String>,
        quantity: i32,
    ) -> Result<Self, OrderError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_empty() {
            return Err(OrderError::EmptyItemId);
        }
        if self.name.is_empty() {
            return Err(OrderError::EmptyItemName);
        }
        if self.product_id.is_empty() {
            return Err(OrderError::EmptyProductId);
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(OrderError::NegativePrice(self.price));
        }
        if self.quantity <= 0 {
            return Err(OrderError::InvalidQuantity(self.quantity));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Deserialize)]
struct OrderItemFields {
    id: String,
    name: String,
    price: f64,
    product_id: String,
    quantity: i32,
}

impl TryFrom<OrderItemFields> for OrderItem {
    type Error = OrderError;

    fn try_from(fields: OrderItemFields) -> Result<Self, Self::Error> {
        Self::new(fields.id, fields.name, fields.price, fields.product_id, fields.quantity)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
