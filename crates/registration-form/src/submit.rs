// File: src/submit.rs
// Purpose: What happens to a record once it passes validation

use tracing::{info, warn};

use crate::values::FormValues;

/// Receives every accepted record. Called synchronously from submit.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &FormValues);
}

/// Default handler: logs the accepted record with passwords masked
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn on_submit(&mut self, values: &FormValues) {
        match serde_json::to_string(&values.redacted()) {
            Ok(json) => info!(form_data = %json, "Successfully registered"),
            Err(e) => warn!(error = %e, "Successfully registered, but form data could not be serialized"),
        }
    }
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormValues),
{
    fn on_submit(&mut self, values: &FormValues) {
        self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_handler_receives_values() {
        let mut seen = Vec::new();
        {
            let mut handler = |values: &FormValues| seen.push(values.fullname.clone());
            let mut values = FormValues::new();
            values.fullname = "Jane Doe".into();
            handler.on_submit(&values);
        }
        assert_eq!(seen, vec!["Jane Doe".to_string()]);
    }

    #[test]
    fn test_log_submit_does_not_panic() {
        let mut handler = LogSubmit;
        handler.on_submit(&FormValues::new());
    }
}
