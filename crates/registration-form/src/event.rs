// File: src/event.rs
// Purpose: UI interactions the rendering layer forwards to the engine

use crate::field::{FieldName, FieldValue, FileRef};

/// One user interaction. Each is handled by a single synchronous pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// An input's value changed (keystroke, select, checkbox)
    Changed { field: FieldName, value: FieldValue },
    /// An input lost focus
    Blurred(FieldName),
    /// The file picker for the profile picture returned
    FileSelected(Option<FileRef>),
    SubmitRequested,
    /// Processing of an accepted submission completed
    SubmitFinished,
    Reset,
}

impl FormEvent {
    pub fn changed(field: FieldName, value: impl Into<FieldValue>) -> Self {
        FormEvent::Changed {
            field,
            value: value.into(),
        }
    }
}
