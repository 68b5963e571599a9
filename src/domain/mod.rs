// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events (where the aggregate announces transitions)
// - Errors
// - Aggregate implementation
// - Domain services
//
// Persistence adapters live in src/infrastructure/ and implement the
// `Repository` port declared here.
//
// ============================================================================

pub mod customer;
pub mod product;
pub mod checkout;
pub mod repository;

pub use repository::Repository;
