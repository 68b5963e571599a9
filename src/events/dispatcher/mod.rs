// ============================================================================
// Event Dispatcher - Synchronous In-Process Delivery
// ============================================================================

pub mod errors;
pub mod event_dispatcher;

pub use errors::DispatchError;
pub use event_dispatcher::{EventDispatcher, HandlerId};
