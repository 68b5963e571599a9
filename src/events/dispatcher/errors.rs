use crate::events::core::HandlerError;

// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Handler {handler} failed on {kind} event: {source}")]
    HandlerFailed {
        kind: String,
        handler: &'static str,
        #[source]
        source: HandlerError,
    },
}
