//! Entity schema trait shared by every record type the panel manages.
//!
//! DESIGN
//! ======
//! Contacts and users differ only in their field list, endpoint paths and
//! cell formatting. Each record type describes those through [`Entity`] so
//! list loading, row rendering and form submission are written once.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::form::{FormField, FormValues};
use crate::row::RowAction;

/// Backend primary key.
pub type RecordId = i64;

/// Horizontal alignment of a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    End,
}

impl Align {
    /// CSS class applied to cells in this column.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Start => "text-start",
            Self::End => "text-end",
        }
    }
}

/// One column of the rendered table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
}

impl Column {
    #[must_use]
    pub const fn start(key: &'static str, label: &'static str) -> Self {
        Self { key, label, align: Align::Start }
    }

    #[must_use]
    pub const fn end(key: &'static str, label: &'static str) -> Self {
        Self { key, label, align: Align::End }
    }
}

/// A record type managed through the collection/item CRUD endpoints.
pub trait Entity:
    Clone + std::fmt::Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Singular noun used in dialog titles (e.g. `"contact"`).
    const NOUN: &'static str;
    /// Page heading (e.g. `"Contacts"`).
    const TITLE: &'static str;
    /// Collection endpoint used for list and create.
    const COLLECTION_PATH: &'static str;
    /// Item endpoint prefix; the record id is appended as the last segment.
    const ITEM_PATH: &'static str;
    /// Whether the collection endpoint accepts `limit`/`offset` paging.
    const PAGED: bool = false;

    fn id(&self) -> RecordId;

    fn columns() -> &'static [Column];

    /// Formatted cell text, one entry per [`Entity::columns`] entry.
    fn cells(&self) -> Vec<String>;

    fn form_fields() -> &'static [FormField];

    /// Current values used to prefill the edit form.
    fn form_values(&self) -> FormValues;

    /// JSON body sent on create and update.
    fn request_body(values: &FormValues) -> serde_json::Value;

    fn row_actions() -> &'static [RowAction] {
        &[RowAction::Edit, RowAction::Delete]
    }

    /// Reflect a successful ban locally. No-op for entities without
    /// [`RowAction::Ban`].
    fn mark_banned(&mut self) {}

    fn item_path(id: RecordId) -> String {
        format!("{}/{id}", Self::ITEM_PATH)
    }
}
