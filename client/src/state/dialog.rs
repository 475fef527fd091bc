//! Edit and delete dialog state machines.
//!
//! Both dialogs move hidden → shown → submitting → hidden on success, or back
//! to shown with an error on failure. A submit issued while one is already in
//! flight is ignored, which keeps double clicks from sending twice.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use records::{ApiFailure, FormField, FormValues, RecordId, SubmitTarget};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Hidden,
    Shown,
    Submitting,
}

/// Create/edit form dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditDialog {
    pub phase: DialogPhase,
    /// Hidden id input: empty for create, the record id for edit.
    pub id_field: String,
    pub values: FormValues,
    pub error: Option<String>,
}

impl EditDialog {
    pub fn open_create(&mut self, fields: &[FormField]) {
        *self = Self {
            phase: DialogPhase::Shown,
            id_field: String::new(),
            values: FormValues::blank(fields),
            error: None,
        };
    }

    pub fn open_edit(&mut self, id: RecordId, values: FormValues) {
        *self = Self {
            phase: DialogPhase::Shown,
            id_field: id.to_string(),
            values,
            error: None,
        };
    }

    pub fn set_value(&mut self, name: &str, value: String) {
        self.values.set(name, value);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Hidden
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// Move to submitting and return the target, or `None` when the dialog
    /// is not accepting a submit (hidden, already in flight, bad id field).
    pub fn begin_submit(&mut self) -> Option<SubmitTarget> {
        if self.phase != DialogPhase::Shown {
            return None;
        }
        match SubmitTarget::from_id_field(&self.id_field) {
            Ok(target) => {
                self.phase = DialogPhase::Submitting;
                self.error = None;
                Some(target)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    /// Close on success, or return to shown with the failure message.
    /// Returns whether the submit succeeded.
    pub fn finish_submit<T>(&mut self, result: &Result<T, ApiFailure>) -> bool {
        match result {
            Ok(_) => {
                *self = Self::default();
                true
            }
            Err(err) => {
                self.phase = DialogPhase::Shown;
                self.error = Some(err.to_string());
                false
            }
        }
    }

    /// Dismiss the dialog. Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if self.phase == DialogPhase::Shown {
            *self = Self::default();
        }
    }

    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        if self.id_field.is_empty() {
            format!("New {noun}")
        } else {
            format!("Edit {noun} #{}", self.id_field)
        }
    }
}

/// Delete confirmation dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteDialog {
    pub phase: DialogPhase,
    pub id: Option<RecordId>,
    pub error: Option<String>,
}

impl DeleteDialog {
    pub fn open(&mut self, id: RecordId) {
        *self = Self {
            phase: DialogPhase::Shown,
            id: Some(id),
            error: None,
        };
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Hidden
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// Move to submitting and return the id to delete.
    pub fn begin_confirm(&mut self) -> Option<RecordId> {
        if self.phase != DialogPhase::Shown {
            return None;
        }
        let id = self.id?;
        self.phase = DialogPhase::Submitting;
        self.error = None;
        Some(id)
    }

    pub fn finish<T>(&mut self, result: &Result<T, ApiFailure>) -> bool {
        match result {
            Ok(_) => {
                *self = Self::default();
                true
            }
            Err(err) => {
                self.phase = DialogPhase::Shown;
                self.error = Some(err.to_string());
                false
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == DialogPhase::Shown {
            *self = Self::default();
        }
    }
}
