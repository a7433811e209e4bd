// File: src/values.rs
// Purpose: The flat record of everything the user has entered

use serde::{Deserialize, Serialize};

use crate::errors::FormError;
use crate::field::{FieldKind, FieldName, FieldValue, FileRef, ValueRef};

const REDACTED: &str = "********";

/// Current contents of the registration form
///
/// `Default` is the state at mount: empty strings, `terms` unchecked,
/// no profile picture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub country: String,
    pub profile_picture: Option<FileRef>,
    pub terms: bool,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a single field's value
    pub fn get(&self, name: FieldName) -> ValueRef<'_> {
        match name {
            FieldName::Fullname => ValueRef::Text(&self.fullname),
            FieldName::Email => ValueRef::Text(&self.email),
            FieldName::Phone => ValueRef::Text(&self.phone),
            FieldName::Dob => ValueRef::Text(&self.dob),
            FieldName::Gender => ValueRef::Text(&self.gender),
            FieldName::Password => ValueRef::Text(&self.password),
            FieldName::ConfirmPassword => ValueRef::Text(&self.confirm_password),
            FieldName::Address => ValueRef::Text(&self.address),
            FieldName::Country => ValueRef::Text(&self.country),
            FieldName::ProfilePicture => ValueRef::File(self.profile_picture.as_ref()),
            FieldName::Terms => ValueRef::Flag(self.terms),
        }
    }

    /// Store a value. The value must already be of the field's kind;
    /// nothing is coerced and a mismatch leaves the record untouched.
    pub fn set(&mut self, name: FieldName, value: FieldValue) -> Result<(), FormError> {
        let found = value.kind();
        match (name, value) {
            (FieldName::Terms, FieldValue::Flag(b)) => self.terms = b,
            (FieldName::ProfilePicture, FieldValue::File(file)) => self.profile_picture = file,
            (name, FieldValue::Text(s)) => match self.text_mut(name) {
                Some(slot) => *slot = s,
                None => return Err(kind_mismatch(name, found)),
            },
            (name, _) => return Err(kind_mismatch(name, found)),
        }
        Ok(())
    }

    /// Builder-style `set` for assembling records in one expression
    pub fn with(mut self, name: FieldName, value: impl Into<FieldValue>) -> Result<Self, FormError> {
        self.set(name, value.into())?;
        Ok(self)
    }

    /// Copy with both password fields masked, safe to log
    pub fn redacted(&self) -> Self {
        let mask = |s: &str| if s.is_empty() { String::new() } else { REDACTED.to_string() };
        Self {
            password: mask(&self.password),
            confirm_password: mask(&self.confirm_password),
            ..self.clone()
        }
    }

    fn text_mut(&mut self, name: FieldName) -> Option<&mut String> {
        let slot = match name {
            FieldName::Fullname => &mut self.fullname,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Dob => &mut self.dob,
            FieldName::Gender => &mut self.gender,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::Address => &mut self.address,
            FieldName::Country => &mut self.country,
            FieldName::ProfilePicture | FieldName::Terms => return None,
        };
        Some(slot)
    }
}

fn kind_mismatch(field: FieldName, found: FieldKind) -> FormError {
    FormError::KindMismatch {
        field,
        expected: field.kind(),
        found,
    }
}
