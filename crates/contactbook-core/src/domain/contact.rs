use crate::domain::ids::ContactId;
use crate::error::CoreError;
use crate::rules::validation::{
    validate_address, validate_first_name, validate_last_name, validate_phone,
};
use serde::{Deserialize, Serialize};

/// Raw, unvalidated input for a contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNew {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

/// A directory entry whose fields are valid at every observable point.
///
/// The id is fixed at construction. Every other field changes only through a
/// setter that checks the same rule as [`Contact::new`] and leaves the old
/// value in place when the new one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactNew")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl Contact {
    pub fn new(
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, CoreError> {
        let id = ContactId::new(id)?;
        validate_first_name(first_name)?;
        validate_last_name(last_name)?;
        validate_phone(phone)?;
        let address = validate_address(address)?;

        Ok(Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        self.address.trim()
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), CoreError> {
        validate_first_name(value)?;
        self.first_name = value.to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), CoreError> {
        validate_last_name(value)?;
        self.last_name = value.to_string();
        Ok(())
    }

    pub fn set_phone(&mut self, value: &str) -> Result<(), CoreError> {
        validate_phone(value)?;
        self.phone = value.to_string();
        Ok(())
    }

    pub fn set_address(&mut self, value: &str) -> Result<(), CoreError> {
        let trimmed = validate_address(value)?;
        self.address = trimmed.to_string();
        Ok(())
    }
}

impl TryFrom<ContactNew> for Contact {
    type Error = CoreError;

    fn try_from(input: ContactNew) -> Result<Self, Self::Error> {
        Self::new(
            &input.id,
            &input.first_name,
            &input.last_name,
            &input.phone,
            &input.address,
        )
    }
}
