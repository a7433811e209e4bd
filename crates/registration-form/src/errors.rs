// File: src/errors.rs
// Purpose: Field error mapping and API misuse errors

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::field::{FieldKind, FieldName};

/// Misuse of the engine API. Never produced by validation itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field `{field}` expects a {expected} value, got {found}")]
    KindMismatch {
        field: FieldName,
        expected: FieldKind,
        found: FieldKind,
    },
}

/// Current validation messages, one per failing field
///
/// A field missing from the mapping is valid. Iteration follows form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FormErrors(BTreeMap<FieldName, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the message for a field, if it is failing
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: FieldName) {
        self.0.remove(&field);
    }

    /// Record the outcome of validating one field: a message replaces any
    /// previous one, `None` clears it.
    pub fn apply(&mut self, field: FieldName, outcome: Option<String>) {
        match outcome {
            Some(message) => self.insert(field, message),
            None => self.clear_field(field),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for FormErrors {
    fn from_iter<T: IntoIterator<Item = (FieldName, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// True iff no field is failing
pub fn is_valid(errors: &FormErrors) -> bool {
    errors.is_empty()
}
