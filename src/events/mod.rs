// ============================================================================
// Domain Event Infrastructure
// ============================================================================
//
// Generic, reusable event publishing infrastructure.
// Domain-specific events and handlers live in src/domain/
//
// ============================================================================

// Core abstractions (GENERIC - works with any event union)
mod core;
mod dispatcher;

// Re-export core infrastructure
pub use self::core::*;
pub use self::dispatcher::*;
