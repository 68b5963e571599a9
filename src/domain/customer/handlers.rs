use crate::events::{serialize_event, EventHandler, HandlerError};
use super::events::{CustomerAddressChanged, CustomerCreated};

// ============================================================================
// Customer Event Handlers
// ============================================================================

/// First log reaction to a customer being created
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerIsCreatedHandler1;

impl LogWhenCustomerIsCreatedHandler1 {
    pub const MESSAGE: &'static str = "This is the first log of the event: CustomerCreated";
}

impl EventHandler<CustomerCreated> for LogWhenCustomerIsCreatedHandler1 {
    fn handle(&self, event: &CustomerCreated) -> Result<(), HandlerError> {
        tracing::info!(customer_id = %event.id, "{}", Self::MESSAGE);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWhenCustomerIsCreatedHandler1"
    }
}

/// Second log reaction to a customer being created
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerIsCreatedHandler2;

impl LogWhenCustomerIsCreatedHandler2 {
    pub const MESSAGE: &'static str = "This is the second log of the event: CustomerCreated";
}

impl EventHandler<CustomerCreated> for LogWhenCustomerIsCreatedHandler2 {
    fn handle(&self, event: &CustomerCreated) -> Result<(), HandlerError> {
        let payload = serialize_event(event)?;
        tracing::info!(customer_id = %event.id, payload = %payload, "{}", Self::MESSAGE);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWhenCustomerIsCreatedHandler2"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogWhenCustomerAddressChangedHandler;

impl LogWhenCustomerAddressChangedHandler {
    pub fn message(event: &CustomerAddressChanged) -> String {
        format!(
            "customer {}, {} address changed to: {}",
            event.id, event.name, event.address
        )
    }
}

impl EventHandler<CustomerAddressChanged> for LogWhenCustomerAddressChangedHandler {
    fn handle(&self, event: &CustomerAddressChanged) -> Result<(), HandlerError> {
        tracing::info!(customer_id = %event.id, "{}", Self::message(event));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LogWhenCustomerAddressChangedHandler"
    }
}
