use crate::error::{DirectoryError, Operation, Result};
use contactbook_config::DirectoryConfig;
use contactbook_core::domain::{Contact, ContactId};
use contactbook_core::CoreError;
use std::collections::HashMap;
use tracing::debug;

/// Field changes for [`Directory::update`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }
}

/// In-memory contacts keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: HashMap<ContactId, Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        if self.contacts.contains_key(contact.id()) {
            debug!(contact_id = %contact.id(), "rejected duplicate contact id");
            return Err(DirectoryError::DuplicateId(contact.id().clone()));
        }
        debug!(contact_id = %contact.id(), "contact added");
        self.contacts.insert(contact.id().clone(), contact);
        Ok(())
    }

    /// Removes a contact and hands it back to the caller.
    pub fn delete(&mut self, id: &str) -> Result<Contact> {
        match self.contacts.remove(id) {
            Some(contact) => {
                debug!(contact_id = id, "contact deleted");
                Ok(contact)
            }
            None => {
                debug!(contact_id = id, "delete of unknown contact");
                Err(DirectoryError::not_found(Operation::Delete, id))
            }
        }
    }

    /// Applies the supplied fields in order: first name, last name, phone,
    /// address. Stops at the first rejected value; fields applied before it
    /// are kept.
    pub fn update(&mut self, id: &str, update: ContactUpdate) -> Result<&Contact> {
        let Some(contact) = self.contacts.get_mut(id) else {
            debug!(contact_id = id, "update of unknown contact");
            return Err(DirectoryError::not_found(Operation::Update, id));
        };

        if let Err(err) = apply_update(contact, update) {
            debug!(contact_id = id, error = %err, "contact update rejected");
            return Err(err.into());
        }
        debug!(contact_id = id, "contact updated");
        Ok(&*contact)
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates contacts in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }
}

fn apply_update(contact: &mut Contact, update: ContactUpdate) -> std::result::Result<(), CoreError> {
    if let Some(value) = update.first_name {
        contact.set_first_name(&value)?;
    }
    if let Some(value) = update.last_name {
        contact.set_last_name(&value)?;
    }
    if let Some(value) = update.phone {
        contact.set_phone(&value)?;
    }
    if let Some(value) = update.address {
        contact.set_address(&value)?;
    }
    Ok(())
}
