pub mod validation;

pub use validation::{
    validate_address, validate_contact_id, validate_first_name, validate_last_name,
    validate_phone, MAX_ADDRESS_LEN, MAX_ID_LEN, MAX_NAME_LEN, PHONE_LEN,
};
