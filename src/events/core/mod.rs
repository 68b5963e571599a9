// ============================================================================
// Event Core - Generic Event Abstractions
// ============================================================================
//
// Key Principles:
// - No domain-specific code (no Order, Customer, Product, etc.)
// - Events are grouped per aggregate into a union enum with a kind tag
// - Handlers are typed by the payload they react to
//
// ============================================================================

pub mod event;
pub mod handler;

// Re-export core types for convenience
pub use event::{DomainEvent, EventPayload, serialize_event};
pub use handler::{EventHandler, HandlerError};
