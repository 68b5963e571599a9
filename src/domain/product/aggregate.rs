use serde::{Deserialize, Serialize};

use super::errors::ProductError;

// ============================================================================
// Product Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductFields")]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_empty() {
            return Err(ProductError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        Self::validate_price(self.price)
    }

    fn validate_price(price: f64) -> Result<(), ProductError> {
        if price.is_nan() || price < 0.0 {
            return Err(ProductError::NegativePrice(price));
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

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), ProductError> {
        Self::validate_price(price)?;
        self.price = price;
        Ok(())
    }
}

#[derive(Deserialize)]
struct ProductFields {
    id: String,
    name: String,
    price: f64,
}

impl TryFrom<ProductFields> for Product {
    type Error = ProductError;

    fn try_from(fields: ProductFields) -> Result<Self, Self::Error> {
        Self::new(fields.id, fields.name, fields.price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("123", "Product 1", 100.0).unwrap();

        assert_eq!(product.id(), "123");
        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }

    #[test]
    fn test_product_requires_id_and_name() {
        assert!(matches!(Product::new("", "Product 1", 100.0), Err(ProductError::EmptyId)));
        assert!(matches!(Product::new("123", "", 100.0), Err(ProductError::EmptyName)));
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let err = Product::new("123", "Product 1", -1.0).unwrap_err();

        assert!(matches!(err, ProductError::NegativePrice(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn test_product_deserialization_validates() {
        let product: Product = serde_json::from_str(r#"{"id":"123","name":"Product 1","price":100.0}"#).unwrap();
        assert_eq!(product, Product::new("123", "Product 1", 100.0).unwrap());

        assert!(serde_json::from_str::<Product>(r#"{"id":"","name":"Product 1","price":100.0}"#).is_err());
        assert!(serde_json::from_str::<Product>(r#"{"id":"123","name":"Product 1","price":-1.0}"#).is_err());
    }

    #[test]
    fn test_change_name_and_price() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        product.change_name("Product 2").unwrap();
        product.change_price(150.0).unwrap();

        assert_eq!(product.name(), "Product 2");
        assert_eq!(product.price(), 150.0);
    }

    #[test]
    fn test_invalid_changes_keep_previous_state() {
        let mut product = Product::new("123", "Product 1", 100.0).unwrap();

        assert!(product.change_name("").is_err());
        assert!(product.change_price(-5.0).is_err());

        assert_eq!(product.name(), "Product 1");
        assert_eq!(product.price(), 100.0);
    }
}
