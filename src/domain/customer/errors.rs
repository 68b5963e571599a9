use crate::events::DispatchError;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Id is required")]
    EmptyId,

    #[error("Name is required")]
    EmptyName,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Number must be greater than 0")]
    InvalidNumber(i32),

    #[error("Zip is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Failed to dispatch customer event")]
    Dispatch(#[from] DispatchError),
}

impl CustomerError {
    /// Invariant violation on the customer or its address
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CustomerError::EmptyId
                | CustomerError::EmptyName
                | CustomerError::EmptyStreet
                | CustomerError::InvalidNumber(_)
                | CustomerError::EmptyZip
                | CustomerError::EmptyCity
        )
    }

    /// State transition attempted without its precondition
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, CustomerError::AddressRequired)
    }
}
