use crate::error::CoreError;

pub const MAX_ID_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 10;
pub const PHONE_LEN: usize = 10;
pub const MAX_ADDRESS_LEN: usize = 30;

/// Length limits count characters of the raw value, before any trimming.
fn is_bounded_text(raw: &str, max_len: usize) -> bool {
    !raw.trim().is_empty() && raw.chars().count() <= max_len
}

pub fn validate_contact_id(raw: &str) -> Result<(), CoreError> {
    if !is_bounded_text(raw, MAX_ID_LEN) {
        return Err(CoreError::InvalidContactId);
    }
    Ok(())
}

pub fn validate_first_name(raw: &str) -> Result<(), CoreError> {
    if !is_bounded_text(raw, MAX_NAME_LEN) {
        return Err(CoreError::InvalidFirstName);
    }
    Ok(())
}

pub fn validate_last_name(raw: &str) -> Result<(), CoreError> {
    if !is_bounded_text(raw, MAX_NAME_LEN) {
        return Err(CoreError::InvalidLastName);
    }
    Ok(())
}

pub fn validate_phone(raw: &str) -> Result<(), CoreError> {
    if raw.len() != PHONE_LEN || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(CoreError::InvalidPhone);
    }
    Ok(())
}

/// Returns the trimmed address that should be stored.
pub fn validate_address(raw: &str) -> Result<&str, CoreError> {
    if !is_bounded_text(raw, MAX_ADDRESS_LEN) {
        return Err(CoreError::InvalidAddress);
    }
    Ok(raw.trim())
}
