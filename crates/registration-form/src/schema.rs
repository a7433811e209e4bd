// File: src/schema.rs
// Purpose: Ordered rule sets for every registration field and the pure validation passes

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::FormConfig;
use crate::errors::{FormError, FormErrors};
use crate::field::{FieldName, FieldValue};
use crate::rule::{first_failure, Check, Rule};
use crate::values::FormValues;

/// Rule sets for the registration form
///
/// Every field has an entry; `profilePicture`'s is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationSchema {
    rules: BTreeMap<FieldName, Vec<Rule>>,
}

impl Default for RegistrationSchema {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl RegistrationSchema {
    pub fn from_config(config: &FormConfig) -> Self {
        use Check::*;

        let min = config.password.min_length;
        let digits = config.phone.digits;

        let rules = BTreeMap::from([
            (FieldName::Fullname, vec![Rule::new(Required, "Full name is required")]),
            (
                FieldName::Email,
                vec![
                    Rule::new(Required, "Email is required"),
                    Rule::new(Email, "Invalid email address"),
                ],
            ),
            (
                FieldName::Phone,
                vec![
                    Rule::new(Required, "Phone number is required"),
                    Rule::new(Digits(digits), format!("Phone number must be {digits} digits")),
                ],
            ),
            (
                FieldName::Dob,
                vec![
                    Rule::new(Required, "Date of birth is required"),
                    Rule::new(Date, "Date of birth is required"),
                ],
            ),
            (
                FieldName::Gender,
                vec![
                    Rule::new(Required, "Gender is required"),
                    Rule::new(OneOf(config.choices.genders.clone()), "Gender is required"),
                ],
            ),
            (
                FieldName::Password,
                vec![
                    Rule::new(Required, "Password is required"),
                    Rule::new(MinLength(min), format!("Password must be at least {min} characters")),
                ],
            ),
            (
                FieldName::ConfirmPassword,
                vec![
                    Rule::new(Required, "Please confirm your password"),
                    Rule::new(EqualsField(FieldName::Password), "Passwords must match"),
                ],
            ),
            (FieldName::Address, vec![Rule::new(Required, "Address is required")]),
            (
                FieldName::Country,
                vec![
                    Rule::new(Required, "Country is required"),
                    Rule::new(OneOf(config.choices.countries.clone()), "Country is required"),
                ],
            ),
            (FieldName::ProfilePicture, Vec::new()),
            (
                FieldName::Terms,
                vec![Rule::new(Accepted, "You must agree to the terms and conditions")],
            ),
        ]);

        Self { rules }
    }

    pub fn rules_for(&self, field: FieldName) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields whose rule sets read `field`
    pub fn dependents(&self, field: FieldName) -> impl Iterator<Item = FieldName> + '_ {
        self.rules
            .iter()
            .filter(move |(_, rules)| rules.iter().any(|r| r.check.reads() == Some(field)))
            .map(|(name, _)| *name)
    }

    /// Message of the first failing rule for one field
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<String> {
        first_failure(self.rules_for(field), values.get(field), values).map(str::to_string)
    }

    /// Run every field's rule set against the full record
    pub fn validate_all(&self, values: &FormValues) -> FormErrors {
        let errors: FormErrors = FieldName::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field, values).map(|msg| (field, msg)))
            .collect();
        debug!(failing = errors.len(), "validated all fields");
        errors
    }

    /// Store `value` and revalidate `field` plus every field that reads it.
    ///
    /// Errors of unrelated fields are carried over unchanged. Inputs are
    /// never modified; a kind mismatch returns an error and no new state.
    pub fn set_field(
        &self,
        values: &FormValues,
        errors: &FormErrors,
        field: FieldName,
        value: FieldValue,
    ) -> Result<(FormValues, FormErrors), FormError> {
        let mut next_values = values.clone();
        next_values.set(field, value)?;

        let mut next_errors = errors.clone();
        self.revalidate(field, &next_values, &mut next_errors);

        Ok((next_values, next_errors))
    }

    /// Recompute the errors of `field` and its dependents in place
    pub(crate) fn revalidate(&self, field: FieldName, values: &FormValues, errors: &mut FormErrors) {
        let affected: Vec<FieldName> = std::iter::once(field).chain(self.dependents(field)).collect();
        for name in affected {
            let outcome = self.validate_field(name, values);
            debug!(field = %name, error = ?outcome, "validated field");
            errors.apply(name, outcome);
        }
    }

    /// Validate everything; hand back the record if it is acceptable
    pub fn submit(&self, values: &FormValues) -> Result<FormValues, FormErrors> {
        let errors = self.validate_all(values);
        if errors.is_empty() {
            Ok(values.clone())
        } else {
            Err(errors)
        }
    }
}
