// ============================================================================
// Customer Domain - Business Logic for Customer Aggregate
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Address)
// - Events (CustomerCreated, CustomerAddressChanged)
// - Errors (CustomerError enum)
// - Aggregate (Customer with business rules)
// - Handlers (logging reactions to customer events)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod aggregate;
pub mod handlers;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use aggregate::*;
pub use handlers::*;
