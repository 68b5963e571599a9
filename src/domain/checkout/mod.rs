// ============================================================================
// Checkout Domain - Business Logic for Order Aggregate
// ============================================================================
//
// This module contains ALL Order-specific code:
// - Value objects (OrderItem)
// - Errors (OrderError enum)
// - Aggregate (Order with business rules)
// - Service (order totals, placing orders for a customer)
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
