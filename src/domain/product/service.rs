use super::aggregate::Product;
use super::errors::ProductError;

// ============================================================================
// Product Domain Service
// ============================================================================

/// Raise the price of every product by `percentage` percent.
pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
    for product in products.iter_mut() {
        let new_price = product.price() * percentage / 100.0 + product.price();
        product.change_price(new_price)?;
    }

    tracing::debug!(count = products.len(), percentage, "Increased product prices");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("1", "Product 1", 10.0).unwrap(),
            Product::new("2", "Product 2", 20.0).unwrap(),
        ];

        increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }
}
