use contactbook_core::{ContactId, CoreError};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Delete,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Delete => f.write_str("delete"),
            Operation::Update => f.write_str("update"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("validation error: {0}")]
    Validation(#[from] CoreError),
    #[error("a contact with this id already exists: {0}")]
    DuplicateId(ContactId),
    #[error("cannot {op}, contact not found: {id}")]
    NotFound { op: Operation, id: String },
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryErrorKind {
    Validation,
    DuplicateId,
    NotFound,
}

impl DirectoryError {
    pub fn kind(&self) -> DirectoryErrorKind {
        match self {
            DirectoryError::Validation(_) => DirectoryErrorKind::Validation,
            DirectoryError::DuplicateId(_) => DirectoryErrorKind::DuplicateId,
            DirectoryError::NotFound { .. } => DirectoryErrorKind::NotFound,
        }
    }

    pub(crate) fn not_found(op: Operation, id: &str) -> Self {
        DirectoryError::NotFound {
            op,
            id: id.to_string(),
        }
    }
}
