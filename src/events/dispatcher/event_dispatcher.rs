use std::collections::HashMap;
use std::fmt;

use crate::events::core::{DomainEvent, EventHandler, EventPayload, HandlerError};
use super::errors::DispatchError;

// ============================================================================
// Event Dispatcher - Registry + Synchronous Delivery
// ============================================================================
//
// Maps an event kind to the ordered list of handlers registered for it.
//
// - Insertion order is delivery order
// - Delivery is fail-fast: the first handler error aborts the notify call
// - Registry mutation needs `&mut self`; build it at composition time, then
//   share it read-only (e.g. `Arc<EventDispatcher<E>>`)
//
// ============================================================================

/// Identifies one registration, returned by `register` and used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Deliver<E> = Box<dyn Fn(&E) -> Result<(), HandlerError> + Send + Sync>;

struct Registration<E> {
    id: HandlerId,
    name: &'static str,
    deliver: Deliver<E>,
}

pub struct EventDispatcher<E: DomainEvent> {
    handlers: HashMap<E::Kind, Vec<Registration<E>>>,
    next_id: u64,
}

impl<E: DomainEvent> EventDispatcher<E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register `handler` for the kind of payload `P`.
    ///
    /// The same handler may be registered more than once; it is then invoked
    /// once per registration.
    pub fn register<P, H>(&mut self, handler: H) -> HandlerId
    where
        P: EventPayload<E>,
        H: EventHandler<P> + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;

        let kind = P::KIND;
        let name = handler.name();
        let deliver: Deliver<E> = Box::new(move |event: &E| match P::extract(event) {
            Some(payload) => handler.handle(payload),
            None => Ok(()),
        });

        self.handlers
            .entry(kind)
            .or_default()
            .push(Registration { id, name, deliver });

        tracing::debug!(
            kind = %kind,
            handler = name,
            handler_id = id.0,
            "Registered event handler"
        );

        id
    }

    /// Remove a single registration. Returns `false` if `id` is unknown.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        let mut removed = false;

        self.handlers.retain(|kind, registrations| {
            let before = registrations.len();
            registrations.retain(|r| r.id != id);
            if registrations.len() != before {
                removed = true;
                tracing::debug!(kind = %kind, handler_id = id.0, "Unregistered event handler");
            }
            !registrations.is_empty()
        });

        removed
    }

    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Number of registrations for `kind`
    pub fn handler_count(&self, kind: E::Kind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver `event` to every handler registered for its kind, in
    /// registration order. No handlers is a no-op.
    pub fn notify(&self, event: &E) -> Result<(), DispatchError> {
        let kind = event.kind();

        let Some(registrations) = self.handlers.get(&kind) else {
            tracing::debug!(kind = %kind, "No handlers registered for event");
            return Ok(());
        };

        for registration in registrations {
            tracing::debug!(kind = %kind, handler = registration.name, "Delivering event");

            (registration.deliver)(event).map_err(|source| {
                tracing::error!(
                    kind = %kind,
                    handler = registration.name,
                    error = %source,
                    "Event handler failed, aborting delivery"
                );
                DispatchError::HandlerFailed {
                    kind: kind.to_string(),
                    handler: registration.name,
                    source,
                }
            })?;
        }

        Ok(())
    }
}

impl<E: DomainEvent> Default for EventDispatcher<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DomainEvent> fmt::Debug for EventDispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<_, _> = self
            .handlers
            .iter()
            .map(|(kind, registrations)| (*kind, registrations.len()))
            .collect();

        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .finish()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
