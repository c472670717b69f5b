use crate::error::CoreError;
use crate::rules::validation::validate_contact_id;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId(String);

impl ContactId {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        validate_contact_id(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ContactId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ContactId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_contact_id(&value)?;
        Ok(Self(value))
    }
}

impl From<ContactId> for String {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

impl AsRef<str> for ContactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq delegate to the inner String, so map lookups by &str agree.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
