use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;

// ============================================================================
// Customer Value Objects
// ============================================================================

/// Customer address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AddressFields")]
pub struct Address {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, CustomerError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), CustomerError> {
        if self.street.is_empty() {
            return Err(CustomerError::EmptyStreet);
        }
        if self.number <= 0 {
            return Err(CustomerError::InvalidNumber(self.number));
        }
        if self.zip.is_empty() {
            return Err(CustomerError::EmptyZip);
        }
        if self.city.is_empty() {
            return Err(CustomerError::EmptyCity);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

#[derive(Deserialize)]
struct AddressFields {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl TryFrom<AddressFields> for Address {
    type Error = CustomerError;

    fn try_from(fields: AddressFields) -> Result<Self, Self::Error> {
        Self::new(fields.street, fields.number, fields.zip, fields.city)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
