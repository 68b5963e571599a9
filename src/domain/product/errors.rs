// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Price must be greater than or equal to zero: {0}")]
    NegativePrice(f64),
}

impl ProductError {
    pub fn is_validation(&self) -> bool {
        true
    }

    pub fn is_invalid_operation(&self) -> bool {
        false
    }
}
