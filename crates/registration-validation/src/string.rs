//! String validation functions

/// A value counts as present once it holds at least one character.
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Length in UTF-16 code units, the unit browser form inputs measure in.
/// Characters outside the Basic Multilingual Plane count twice.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    utf16_len(value) >= min
}

/// Exactly `count` ASCII decimal digits and nothing else
pub fn is_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Equality validator
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}
