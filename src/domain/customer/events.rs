use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::fmt;

use crate::events::{DomainEvent, EventPayload};
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Union type for all customer events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CustomerEvent {
    Created(CustomerCreated),
    AddressChanged(CustomerAddressChanged),
}

/// Registry key for customer events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerEventKind {
    Created,
    AddressChanged,
}

impl fmt::Display for CustomerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            CustomerEventKind::Created => "CustomerCreated",
            CustomerEventKind::AddressChanged => "CustomerAddressChanged",
        };
        f.write_str(tag)
    }
}

impl DomainEvent for CustomerEvent {
    type Kind = CustomerEventKind;

    fn kind(&self) -> CustomerEventKind {
        match self {
            CustomerEvent::Created(_) => CustomerEventKind::Created,
            CustomerEvent::AddressChanged(_) => CustomerEventKind::AddressChanged,
        }
    }
}

// Individual event types

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: String,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerCreated {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            occurred_at: Utc::now(),
        }
    }
}

impl EventPayload<CustomerEvent> for CustomerCreated {
    const KIND: CustomerEventKind = CustomerEventKind::Created;

    fn extract(event: &CustomerEvent) -> Option<&Self> {
        match event {
            CustomerEvent::Created(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub occurred_at: DateTime<Utc>,
}

impl CustomerAddressChanged {
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: Address) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address,
            occurred_at: Utc::now(),
        }
    }
}

impl EventPayload<CustomerEvent> for CustomerAddressChanged {
    const KIND: CustomerEventKind = CustomerEventKind::AddressChanged;

    fn extract(event: &CustomerEvent) -> Option<&Self> {
        match event {
            CustomerEvent::AddressChanged(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CustomerCreated> for CustomerEvent {
    fn from(event: CustomerCreated) -> Self {
        CustomerEvent::Created(event)
    }
}

impl From<CustomerAddressChanged> for CustomerEvent {
    fn from(event: CustomerAddressChanged) -> Self {
        CustomerEvent::AddressChanged(event)
    }
}
