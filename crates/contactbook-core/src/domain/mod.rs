pub mod contact;
pub mod ids;

pub use contact::{Contact, ContactNew};
pub use ids::ContactId;
