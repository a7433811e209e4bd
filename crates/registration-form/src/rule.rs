// File: src/rule.rs
// Purpose: A single predicate + message pair and the checks it can run

use registration_validation::{
    equals, has_min_length, is_digits, is_one_of, is_present, is_valid_date, is_valid_email,
};

use crate::field::{FieldName, ValueRef};
use crate::values::FormValues;

/// What a rule checks. Checks that do not apply to a value's kind fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Text is non-empty, a file is attached
    Required,
    /// Text has an email-address shape
    Email,
    /// Text is exactly this many decimal digits
    Digits(usize),
    /// Text has at least this many characters
    MinLength(usize),
    /// Text is a `YYYY-MM-DD` calendar date
    Date,
    /// Text is one of the listed options
    OneOf(Vec<String>),
    /// Text equals another text field of the same record
    EqualsField(FieldName),
    /// Flag is checked
    Accepted,
}

impl Check {
    pub fn passes(&self, value: ValueRef<'_>, values: &FormValues) -> bool {
        match (self, value) {
            (Check::Required, ValueRef::Text(s)) => is_present(s),
            (Check::Required, ValueRef::File(file)) => file.is_some(),
            (Check::Required, ValueRef::Flag(_)) => true,
            (Check::Email, ValueRef::Text(s)) => is_valid_email(s),
            (Check::Digits(n), ValueRef::Text(s)) => is_digits(s, *n),
            (Check::MinLength(n), ValueRef::Text(s)) => has_min_length(s, *n),
            (Check::Date, ValueRef::Text(s)) => is_valid_date(s),
            (Check::OneOf(allowed), ValueRef::Text(s)) => is_one_of(s, allowed.as_slice()),
            (Check::EqualsField(other), ValueRef::Text(s)) => values
                .get(*other)
                .as_text()
                .is_some_and(|expected| equals(s, expected)),
            (Check::Accepted, ValueRef::Flag(b)) => b,
            _ => false,
        }
    }

    /// The sibling field this check reads, if any
    pub fn reads(&self) -> Option<FieldName> {
        match self {
            Check::EqualsField(other) => Some(*other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub message: String,
}

impl Rule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn evaluate(&self, value: ValueRef<'_>, values: &FormValues) -> Result<(), &str> {
        if self.check.passes(value, values) {
            Ok(())
        } else {
            Err(self.message.as_str())
        }
    }
}

/// Run rules in order, stopping at the first failure
pub fn first_failure<'r>(rules: &'r [Rule], value: ValueRef<'_>, values: &FormValues) -> Option<&'r str> {
    rules.iter().find_map(|rule| rule.evaluate(value, values).err())
}
