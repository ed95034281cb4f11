//! Core Entity Trait
//!
//! Basic contract for identifiable domain records, plus the shared error type.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find an entity by ID in a slice
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|item| item.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Decode(err.to_string())
    }
}

/// Decode a stored JSON record. Only objects are accepted: serde would
/// otherwise fill a struct from an array by field position.
pub fn decode_record<T: DeserializeOwned>(json: &str) -> DomainResult<T> {
    match serde_json::from_str::<serde_json::Value>(json)? {
        value @ serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
        other => Err(DomainError::Decode(format!("expected a JSON object, got {}", kind_of(&other)))),
    }
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Pair {
        a: u32,
        b: u32,
    }

    #[test]
    fn test_decode_record_accepts_objects_only() {
        assert_eq!(decode_record::<Pair>(r#"{"a":1}"#), Ok(Pair { a: 1, b: 0 }));
        assert!(matches!(decode_record::<Pair>("[1,2]"), Err(DomainError::Decode(_))));
        assert!(matches!(decode_record::<Pair>("7"), Err(DomainError::Decode(_))));
        assert!(matches!(decode_record::<Pair>("null"), Err(DomainError::Decode(_))));
        assert!(matches!(decode_record::<Pair>("{oops"), Err(DomainError::Decode(_))));
    }
}
