//! # registration-form
//!
//! Validation engine for a user registration form.
//!
//! The engine keeps a flat record of field values, an ordered rule set per
//! field and the messages of the fields currently failing. Rule sets
//! short-circuit, so a field never has more than one message, and a missing
//! value only ever reports its "required" message.
//!
//! ```rust
//! use registration_form::{FieldName, FormEngine};
//!
//! let mut form = FormEngine::new();
//! form.set_field(FieldName::Password, "secret1".into()).unwrap();
//! form.set_field(FieldName::ConfirmPassword, "secret2".into()).unwrap();
//! assert_eq!(
//!     form.errors().get(FieldName::ConfirmPassword),
//!     Some("Passwords must match")
//! );
//!
//! let errors = form.submit().unwrap_err();
//! assert_eq!(errors.get(FieldName::Fullname), Some("Full name is required"));
//! ```
//!
//! The pure passes are also available without an engine: see
//! [`validate_all`], [`is_valid`] and [`RegistrationSchema`].

pub mod config;
pub mod engine;
pub mod errors;
pub mod event;
pub mod field;
pub mod rule;
pub mod schema;
pub mod submit;
pub mod values;

pub use config::FormConfig;
pub use engine::{FormEngine, FormState};
pub use errors::{is_valid, FormError, FormErrors};
pub use event::FormEvent;
pub use field::{FieldKind, FieldName, FieldValue, FileRef, ValueRef};
pub use rule::{Check, Rule};
pub use schema::RegistrationSchema;
pub use submit::{LogSubmit, SubmitHandler};
pub use values::FormValues;

/// Validate a record against the stock registration rules
pub fn validate_all(values: &FormValues) -> FormErrors {
    RegistrationSchema::default().validate_all(values)
}

/// Validate a record against the stock rules, returning it if acceptable
pub fn submit(values: &FormValues) -> Result<FormValues, FormErrors> {
    RegistrationSchema::default().submit(values)
}
