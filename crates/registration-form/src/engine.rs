// File: src/engine.rs
// Purpose: Stateful form engine driven by UI events

use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use crate::config::{BehaviorConfig, FormConfig};
use crate::errors::{FormError, FormErrors};
use crate::event::FormEvent;
use crate::field::{FieldName, FieldValue, FileRef};
use crate::schema::RegistrationSchema;
use crate::submit::{LogSubmit, SubmitHandler};
use crate::values::FormValues;

/// Everything the rendering layer needs to draw the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    /// Fields the user has left, or every field after a submit attempt
    pub touched: BTreeSet<FieldName>,
    pub submit_count: u32,
    pub is_submitting: bool,
}

/// Owns one form's state and applies every interaction to it in order
pub struct FormEngine<H = LogSubmit> {
    schema: RegistrationSchema,
    behavior: BehaviorConfig,
    state: FormState,
    handler: H,
}

impl FormEngine<LogSubmit> {
    /// Stock registration form, accepted records are logged
    pub fn new() -> Self {
        Self::from_config(&FormConfig::default())
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::with_handler(config, LogSubmit)
    }
}

impl Default for FormEngine<LogSubmit> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SubmitHandler> FormEngine<H> {
    pub fn with_handler(config: &FormConfig, handler: H) -> Self {
        Self {
            schema: RegistrationSchema::from_config(config),
            behavior: config.behavior.clone(),
            state: FormState::default(),
            handler,
        }
    }

    pub fn schema(&self) -> &RegistrationSchema {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.state.errors
    }

    pub fn is_valid(&self) -> bool {
        self.state.errors.is_empty()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.state.touched.contains(&field)
    }

    /// Error to show under `field`: only once the user has been there
    pub fn visible_error(&self, field: FieldName) -> Option<&str> {
        if self.is_touched(field) {
            self.state.errors.get(field)
        } else {
            None
        }
    }

    /// The submit control is disabled while a submission is in flight
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting
    }

    /// Store a value and revalidate it (and whatever reads it)
    pub fn set_field(
        &mut self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(&FormValues, &FormErrors), FormError> {
        if let Err(e) = self.apply_change(field, value) {
            warn!(%field, error = %e, "rejected field update");
            return Err(e);
        }
        Ok((&self.state.values, &self.state.errors))
    }

    /// Same as `set_field`, addressing the field by its input name
    pub fn set_field_named(
        &mut self,
        name: &str,
        value: FieldValue,
    ) -> Result<(&FormValues, &FormErrors), FormError> {
        let field: FieldName = match name.parse() {
            Ok(field) => field,
            Err(e) => {
                warn!(name, error = %e, "rejected field update");
                return Err(e);
            }
        };
        self.set_field(field, value)
    }

    fn apply_change(&mut self, field: FieldName, value: FieldValue) -> Result<(), FormError> {
        if self.behavior.validate_on_change {
            let (values, errors) =
                self.schema
                    .set_field(&self.state.values, &self.state.errors, field, value)?;
            self.state.values = values;
            self.state.errors = errors;
        } else {
            self.state.values.set(field, value)?;
        }
        Ok(())
    }

    pub fn blur(&mut self, field: FieldName) {
        self.state.touched.insert(field);
        if self.behavior.validate_on_blur {
            self.schema
                .revalidate(field, &self.state.values, &mut self.state.errors);
        }
    }

    pub fn select_file(&mut self, file: Option<FileRef>) -> Result<(), FormError> {
        self.set_field(FieldName::ProfilePicture, FieldValue::File(file))
            .map(|_| ())
    }

    /// Validate everything and hand an acceptable record to the handler
    ///
    /// Every field becomes touched so all messages show up at once. A
    /// rejected record ends the attempt immediately. An accepted one leaves
    /// the form in flight, with the submit control disabled, until
    /// `finish_submit` is called.
    pub fn submit(&mut self) -> Result<FormValues, FormErrors> {
        self.state.is_submitting = true;
        self.state.submit_count += 1;
        self.state.touched.extend(FieldName::ALL);

        let result = self.schema.submit(&self.state.values);
        match &result {
            Ok(values) => {
                self.state.errors = FormErrors::new();
                info!(attempt = self.state.submit_count, "registration accepted");
                self.handler.on_submit(values);
            }
            Err(errors) => {
                self.state.errors = errors.clone();
                self.state.is_submitting = false;
                debug!(
                    attempt = self.state.submit_count,
                    failing = errors.len(),
                    "registration rejected"
                );
            }
        }
        result
    }

    /// The accepted submission has been processed; re-enable submit
    pub fn finish_submit(&mut self) {
        self.state.is_submitting = false;
    }

    /// Back to the state at mount
    pub fn reset(&mut self) {
        self.state = FormState::default();
    }

    /// Apply one UI interaction
    pub fn dispatch(&mut self, event: FormEvent) -> Result<(), FormError> {
        debug!(?event, "dispatch");
        match event {
            FormEvent::Changed { field, value } => {
                self.set_field(field, value)?;
            }
            FormEvent::Blurred(field) => self.blur(field),
            FormEvent::FileSelected(file) => self.select_file(file)?,
            FormEvent::SubmitRequested if !self.can_submit() => {
                debug!(attempt = self.state.submit_count, "submit ignored while in flight");
            }
            FormEvent::SubmitRequested => match self.submit() {
                Ok(_) => {}
                Err(errors) => {
                    debug!(failing = errors.len(), "submit event left errors on the form");
                }
            },
            FormEvent::SubmitFinished => self.finish_submit(),
            FormEvent::Reset => self.reset(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_state() {
        let engine = FormEngine::new();
        assert_eq!(engine.values(), &FormValues::new());
        assert!(engine.errors().is_empty());
        assert!(engine.can_submit());
        assert_eq!(engine.state().submit_count, 0);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut engine = FormEngine::new();
        engine
            .set_field(FieldName::Phone, "12345".into())
            .unwrap();
        assert_eq!(
            engine.errors().get(FieldName::Phone),
            Some("Phone number must be 10 digits")
        );
        assert_eq!(engine.visible_error(FieldName::Phone), None);

        engine.blur(FieldName::Phone);
        assert_eq!(
            engine.visible_error(FieldName::Phone),
            Some("Phone number must be 10 digits")
        );
    }

    #[test]
    fn test_blur_on_untouched_empty_field_reports_required() {
        let mut engine = FormEngine::new();
        engine.blur(FieldName::Fullname);
        assert_eq!(
            engine.visible_error(FieldName::Fullname),
            Some("Full name is required")
        );
        assert_eq!(engine.errors().len(), 1);
    }

    #[test]
    fn test_validate_on_change_disabled() {
        let mut config = FormConfig::default();
        config.behavior.validate_on_change = false;
        let mut engine = FormEngine::from_config(&config);

        engine.set_field(FieldName::Email, "nope".into()).unwrap();
        assert_eq!(engine.values().email, "nope");
        assert!(engine.errors().is_empty());

        engine.blur(FieldName::Email);
        assert_eq!(engine.errors().get(FieldName::Email), Some("Invalid email address"));
    }

    #[test]
    fn test_validate_on_blur_disabled() {
        let mut config = FormConfig::default();
        config.behavior.validate_on_blur = false;
        let mut engine = FormEngine::from_config(&config);

        engine.blur(FieldName::Fullname);
        assert!(engine.is_touched(FieldName::Fullname));
        assert!(engine.errors().is_empty());
    }

    #[test]
    fn test_set_field_named() {
        let mut engine = FormEngine::new();
        engine
            .set_field_named("confirmPassword", "abc".into())
            .unwrap();
        assert_eq!(engine.values().confirm_password, "abc");

        let err = engine.set_field_named("age", "30".into()).unwrap_err();
        assert_eq!(err, FormError::UnknownField("age".into()));
    }

    #[test]
    fn test_kind_mismatch_keeps_state() {
        let mut engine = FormEngine::new();
        engine.set_field(FieldName::Email, "bad".into()).unwrap();
        let before = engine.state().clone();

        assert!(engine.set_field(FieldName::Terms, "on".into()).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_accepted_submit_stays_in_flight_until_finished() {
        let mut engine = FormEngine::with_handler(&FormConfig::default(), |_: &FormValues| {});
        let values = FormValues {
            fullname: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "1234567890".into(),
            dob: "1990-01-01".into(),
            gender: "female".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            address: "1 Main St".into(),
            country: "usa".into(),
            profile_picture: None,
            terms: true,
        };
        engine.state.values = values;

        assert!(engine.submit().is_ok());
        assert!(engine.state().is_submitting);
        assert!(!engine.can_submit());

        engine.finish_submit();
        assert!(!engine.state().is_submitting);
        assert!(engine.can_submit());
    }

    #[test]
    fn test_rejected_submit_ends_immediately() {
        let mut engine = FormEngine::new();
        assert!(engine.submit().is_err());
        assert!(!engine.state().is_submitting);
        assert!(engine.can_submit());
    }

    #[test]
    fn test_reset() {
        let mut engine = FormEngine::new();
        engine.set_field(FieldName::Fullname, "Jane".into()).unwrap();
        let _ = engine.submit();
        engine.reset();
        assert_eq!(engine.state(), &FormState::default());
    }
}
