//! Registration Validation Core
//!
//! Pure validation functions used by the registration form engine.
//! Each function answers one question about a single value and never fails
//! with anything but a boolean; messages are attached by the caller.

pub mod date;
pub mod email;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use string::*;
