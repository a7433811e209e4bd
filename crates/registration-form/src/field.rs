// File: src/field.rs
// Purpose: Field names, value kinds and typed field values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::FormError;

/// Every input on the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Fullname,
    Email,
    Phone,
    Dob,
    Gender,
    Password,
    ConfirmPassword,
    Address,
    Country,
    ProfilePicture,
    Terms,
}

impl FieldName {
    pub const ALL: [FieldName; 11] = [
        FieldName::Fullname,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Dob,
        FieldName::Gender,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Address,
        FieldName::Country,
        FieldName::ProfilePicture,
        FieldName::Terms,
    ];

    /// Name used by the rendering layer (`name="..."` on the input)
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Fullname => "fullname",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Dob => "dob",
            FieldName::Gender => "gender",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Address => "address",
            FieldName::Country => "country",
            FieldName::ProfilePicture => "profilePicture",
            FieldName::Terms => "terms",
        }
    }

    /// The only kind of value this field accepts
    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::Terms => FieldKind::Flag,
            FieldName::ProfilePicture => FieldKind::File,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text, select, date, password and textarea inputs
    Text,
    /// Checkbox
    Flag,
    /// Optional file input
    File,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Text => "text",
            FieldKind::Flag => "flag",
            FieldKind::File => "file",
        })
    }
}

/// Opaque reference to a file picked by the user. Never inspected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// An owned value coming from the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    File(Option<FileRef>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::File(_) => FieldKind::File,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<FileRef> for FieldValue {
    fn from(value: FileRef) -> Self {
        FieldValue::File(Some(value))
    }
}

impl From<Option<FileRef>> for FieldValue {
    fn from(value: Option<FileRef>) -> Self {
        FieldValue::File(value)
    }
}

/// Borrowed view of a value stored in `FormValues`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRef<'a> {
    Text(&'a str),
    Flag(bool),
    File(Option<&'a FileRef>),
}

impl<'a> ValueRef<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            ValueRef::Text(s) => Some(s),
            _ => None,
        }
    }
}
