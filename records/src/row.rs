//! Pure record → table row mapping.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use crate::schema::{Align, Entity, RecordId};

/// Per-row action control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Ban,
}

impl RowAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::Ban => "Ban",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Edit => "btn btn-outline-secondary btn-edit",
            Self::Delete => "btn btn-outline-secondary btn-delete",
            Self::Ban => "btn btn-outline-danger btn-ban",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub align: Align,
}

/// One rendered table row.
///
/// `lookup` is the value of the row's `data-rowid` attribute and always equals
/// the record id; it is the key used to replace or remove the row later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub id: RecordId,
    pub lookup: String,
    pub cells: Vec<Cell>,
    pub actions: &'static [RowAction],
}

impl Row {
    /// Render `record` against its entity's column list.
    ///
    /// Missing cells render as empty strings; extra cells are dropped.
    #[must_use]
    pub fn render<E: Entity>(record: &E) -> Self {
        let mut texts = record.cells().into_iter();
        let cells = E::columns()
            .iter()
            .map(|column| Cell {
                text: texts.next().unwrap_or_default(),
                align: column.align,
            })
            .collect();
        let id = record.id();
        Self {
            id,
            lookup: id.to_string(),
            cells,
            actions: E::row_actions(),
        }
    }

    /// Cell texts joined with tabs, for plain-text output.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        self.cells.iter().map(|c| c.text.as_str()).collect::<Vec<_>>().join("\t")
    }
}

/// Column labels joined with tabs.
#[must_use]
pub fn header_tsv<E: Entity>() -> String {
    E::columns().iter().map(|c| c.label).collect::<Vec<_>>().join("\t")
}
