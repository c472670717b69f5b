use crate::directory::{ContactUpdate, Directory};
use crate::error::Result;
use contactbook_core::Contact;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`Directory`] behind one coarse lock, for callers on several threads.
///
/// Reads hand out clones since a reference cannot outlive the guard.
#[derive(Debug, Default)]
pub struct SharedDirectory {
    inner: Mutex<Directory>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Mutex::new(directory),
        }
    }

    pub fn add(&self, contact: Contact) -> Result<()> {
        self.lock().add(contact)
    }

    pub fn delete(&self, id: &str) -> Result<Contact> {
        self.lock().delete(id)
    }

    pub fn update(&self, id: &str, update: ContactUpdate) -> Result<Contact> {
        self.lock().update(id, update).cloned()
    }

    pub fn get(&self, id: &str) -> Option<Contact> {
        self.lock().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_inner(self) -> Directory {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Setters validate before writing, so a poisoned directory still holds
    // only valid contacts.
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self::new(directory)
    }
}
