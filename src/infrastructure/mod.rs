// ============================================================================
// Infrastructure Layer - Persistence Adapters
// ============================================================================
//
// SQLite implementations of the domain `Repository` port.
//
// ============================================================================

pub mod repository;

pub use repository::{CustomerRepository, OrderRepository, ProductRepository};
