//! Strongly-typed IDs. The backend hands out opaque strings; we only reject blank ones.

use crate::error::ApiError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

fn validate_id(s: &str) -> Result<String, ApiError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ApiError::InvalidId("empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Owner of transactions and categories.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

macro_rules! id_type {
    ($name:ident) => {
        impl $name {
            pub fn parse(s: impl AsRef<str>) -> Result<Self, ApiError> {
                Self::from_str(s.as_ref())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
        impl FromStr for $name {
            type Err = ApiError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(validate_id(s)?))
            }
        }
        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_str(&self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let s = String::deserialize(de)?;
                Self::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
id_type!(UserId);
id_type!(CategoryId);
id_type!(TransactionId);
