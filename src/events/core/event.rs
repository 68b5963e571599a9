use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use anyhow::Result;

// ============================================================================
// Domain Event Trait
// ============================================================================
//
// Each aggregate groups its events into one union enum. The union exposes an
// explicit kind tag, which is what the dispatcher keys its registry on.
//
// ============================================================================

/// Generic Domain Event trait
///
/// Implemented by the per-aggregate event union (e.g. `CustomerEvent`).
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// Enumerated tag identifying the concrete event variant
    type Kind: Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    fn kind(&self) -> Self::Kind;
}

/// A single variant payload of an event union.
///
/// `KIND` must match what `E::kind()` returns for the variant wrapping this
/// payload, and `extract` must return `Some` for exactly that variant.
pub trait EventPayload<E: DomainEvent>: 'static {
    const KIND: E::Kind;

    fn extract(event: &E) -> Option<&Self>;
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Clone, Debug)]
    #[serde(tag = "type", content = "data")]
    enum TestEvent {
        Opened(Opened),
    }

    #[derive(Serialize, Clone, Debug)]
    struct Opened {
        data: String,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum TestKind {
        Opened,
    }

    impl fmt::Display for TestKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("TestOpened")
        }
    }

    impl DomainEvent for TestEvent {
        type Kind = TestKind;

        fn kind(&self) -> TestKind {
            match self {
                TestEvent::Opened(_) => TestKind::Opened,
            }
        }
    }

    impl EventPayload<TestEvent> for Opened {
        const KIND: TestKind = TestKind::Opened;

        fn extract(event: &TestEvent) -> Option<&Self> {
            match event {
                TestEvent::Opened(e) => Some(e),
            }
        }
    }

    #[test]
    fn test_payload_kind_matches_union_kind() {
        let event = TestEvent::Opened(Opened { data: "x".to_string() });

        assert_eq!(event.kind(), <Opened as EventPayload<TestEvent>>::KIND);
        assert_eq!(Opened::extract(&event).unwrap().data, "x");
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = TestEvent::Opened(Opened { data: "test data".to_string() });

        let json = serialize_event(&event).unwrap();

        assert_eq!(json, r#"{"type":"Opened","data":{"data":"test data"}}"#);
    }
}
