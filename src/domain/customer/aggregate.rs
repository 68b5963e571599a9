use std::fmt;
use std::sync::Arc;

use crate::events::EventDispatcher;
use super::value_objects::Address;
use super::events::{CustomerAddressChanged, CustomerCreated, CustomerEvent};
use super::errors::CustomerError;

// ============================================================================
// Customer Aggregate - Business Logic
// ============================================================================
//
// Invariants:
// 1. id and name are never empty
// 2. an active customer always has an address
//
// Creation and address changes are announced through the injected
// dispatcher. Rehydration from storage (`restore`) announces nothing.
//
// ============================================================================

pub type CustomerDispatcher = EventDispatcher<CustomerEvent>;

#[derive(Clone)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
    dispatcher: Arc<CustomerDispatcher>,
}

impl Customer {
    /// Create a customer and dispatch `CustomerCreated`.
    ///
    /// Fails before any event is dispatched if id or name is empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        dispatcher: Arc<CustomerDispatcher>,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
            dispatcher,
        };
        customer.validate()?;

        tracing::debug!(customer_id = %customer.id, "Customer created");

        customer.publish(CustomerCreated::new(&customer.id, &customer.name))?;
        Ok(customer)
    }

    /// Rebuild a persisted customer without announcing its creation again.
    pub fn restore(
        id: impl Into<String>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: i64,
        dispatcher: Arc<CustomerDispatcher>,
    ) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address,
            active,
            reward_points,
            dispatcher,
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        Ok(customer)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_empty() {
            return Err(CustomerError::EmptyId);
        }
        if self.name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        Ok(())
    }

    fn publish(&self, event: impl Into<CustomerEvent>) -> Result<(), CustomerError> {
        self.dispatcher.notify(&event.into())?;
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Rename the customer. An empty name is rejected and the current name
    /// is kept.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(CustomerError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Replace the address and dispatch `CustomerAddressChanged`.
    pub fn change_address(&mut self, address: Address) -> Result<(), CustomerError> {
        self.address = Some(address.clone());

        tracing::debug!(customer_id = %self.id, address = %address, "Customer address changed");

        self.publish(CustomerAddressChanged::new(&self.id, &self.name, address))
    }

    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credit `points` (may be negative). Saturates at the `i64` bounds.
    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}

impl fmt::Debug for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("address", &self.address)
            .field("active", &self.active)
            .field("reward_points", &self.reward_points)
            .finish_non_exhaustive()
    }
}

// Identity and state only; the dispatcher is a collaborator, not state.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.address == other.address
            && self.active == other.active
            && self.reward_points == other.reward_points
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
