//! Form field descriptors, collected form values and submit targets.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::FormError;
use crate::schema::RecordId;

/// Input control kind for a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Password,
}

impl FieldKind {
    /// HTML `type` attribute for the input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Date => "date",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    #[must_use]
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

/// Raw string values read from a form, keyed by field name, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, String)>,
}

impl FormValues {
    /// Every field present with an empty value.
    #[must_use]
    pub fn blank(fields: &[FormField]) -> Self {
        Self {
            entries: fields.iter().map(|f| (f.name.to_owned(), String::new())).collect(),
        }
    }

    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = Self::default();
        for (k, v) in pairs {
            values.set(k, v);
        }
        values
    }

    /// Value for `name`, or `""` when the field was never set.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Trimmed value for `name`, or `None` when it is blank.
    #[must_use]
    pub fn optional(&self, name: &str) -> Option<&str> {
        let value = self.get(name).trim();
        (!value.is_empty()).then_some(value)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// JSON string for `name`, or `null` when blank.
    #[must_use]
    pub fn json_or_null(&self, name: &str) -> serde_json::Value {
        self.optional(name)
            .map_or(serde_json::Value::Null, |v| serde_json::Value::String(v.to_owned()))
    }
}

/// Whether a submit creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Edit(RecordId),
}

impl SubmitTarget {
    /// Interpret the hidden id field of an edit form: empty means create.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidId`] when the field is non-empty but not an integer.
    pub fn from_id_field(raw: &str) -> Result<Self, FormError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::Create);
        }
        raw.parse::<RecordId>()
            .map(Self::Edit)
            .map_err(|_| FormError::InvalidId(raw.to_owned()))
    }
}
