// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Id is required")]
    EmptyId,

    #[error("CustomerId is required")]
    EmptyCustomerId,

    #[error("Items are required")]
    EmptyItems,

    #[error("Item id is required")]
    EmptyItemId,

    #[error("Item name is required")]
    EmptyItemName,

    #[error("ProductId is required")]
    EmptyProductId,

    #[error("Quantity must be greater than 0: {0}")]
    InvalidQuantity(i32),

    #[error("Item price must be greater than or equal to zero: {0}")]
    NegativePrice(f64),
}

impl OrderError {
    pub fn is_validation(&self) -> bool {
        true
    }

    pub fn is_invalid_operation(&self) -> bool {
        false
    }
}
