// ============================================================================
// SQLite Repositories
// ============================================================================
//
// Runtime-checked queries (no compile-time query macros). Loading an
// aggregate never dispatches domain events.
//
// ============================================================================

pub mod customer;
pub mod product;
pub mod order;

pub use customer::CustomerRepository;
pub use product::ProductRepository;
pub use order::OrderRepository;
