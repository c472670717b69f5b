use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid contact id: must be non-empty and no longer than 10 characters")]
    InvalidContactId,
    #[error("invalid first name: must be non-empty and no longer than 10 characters")]
    InvalidFirstName,
    #[error("invalid last name: must be non-empty and no longer than 10 characters")]
    InvalidLastName,
    #[error("invalid phone: must be exactly 10 digits")]
    InvalidPhone,
    #[error("invalid address: must be non-empty and no longer than 30 characters")]
    InvalidAddress,
}
