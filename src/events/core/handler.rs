use std::sync::Arc;

// ============================================================================
// Event Handler Capability
// ============================================================================

/// Error returned by a handler; the dispatcher wraps it in `DispatchError`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Reaction to one event payload type `P`.
///
/// Handlers run synchronously inside `EventDispatcher::notify`, so they
/// should be fast (logging, in-memory bookkeeping).
pub trait EventHandler<P>: Send + Sync {
    fn handle(&self, event: &P) -> Result<(), HandlerError>;

    /// Name used in logs and dispatch errors
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

// Lets one handler instance be registered several times (or shared with the
// caller) by registering clones of an `Arc`.
impl<P, H> EventHandler<P> for Arc<H>
where
    H: EventHandler<P> + ?Sized,
{
    fn handle(&self, event: &P) -> Result<(), HandlerError> {
        (**self).handle(event)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
