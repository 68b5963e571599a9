// ============================================================================
// Product Domain - Catalog Entries
// ============================================================================

pub mod errors;
pub mod aggregate;
pub mod service;

pub use errors::*;
pub use aggregate::*;
