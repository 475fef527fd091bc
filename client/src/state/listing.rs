//! Ordered, id-keyed record list backing an entity table.
//!
//! DESIGN
//! ======
//! Rows are derived from records on demand, so the lookup key of a row can
//! never disagree with the record it shows. Every insert goes through
//! [`Listing::upsert`], which keeps one row per id.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use records::{ApiFailure, Entity, RecordId, Row};

/// How a successful save changed the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowChange {
    Appended,
    Replaced,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<E> {
    records: Vec<E>,
    load_seq: u64,
    pub loading: bool,
}

impl<E> Default for Listing<E> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            load_seq: 0,
            loading: false,
        }
    }
}

impl<E: Entity> Listing<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[E] {
        &self.records
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        self.records.iter().map(Row::render).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Replace the record with the same id in place, or append it.
    pub fn upsert(&mut self, record: E) -> RowChange {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => {
                *existing = record;
                RowChange::Replaced
            }
            None => {
                self.records.push(record);
                RowChange::Appended
            }
        }
    }

    pub fn remove(&mut self, id: RecordId) -> Option<E> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Replace the whole table with `records`, keeping response order.
    pub fn populate(&mut self, records: Vec<E>) {
        self.records.clear();
        for record in records {
            self.upsert(record);
        }
    }

    /// Mark a load as started and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.load_seq
    }

    /// Apply a finished load. Results from superseded loads are dropped.
    ///
    /// A 404 is the backend's answer for an empty page and yields an empty
    /// table. Any other failure also leaves the table empty and is returned
    /// for the caller to report.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<E>, ApiFailure>) -> Option<ApiFailure> {
        if seq != self.load_seq {
            return None;
        }
        self.loading = false;
        match result {
            Ok(records) => {
                self.populate(records);
                None
            }
            Err(err) if err.is_not_found() => {
                self.records.clear();
                None
            }
            Err(err) => {
                self.records.clear();
                Some(err)
            }
        }
    }

    /// Apply the result of a create/edit. Failures leave the table untouched.
    ///
    /// # Errors
    ///
    /// Returns the request's failure unchanged.
    pub fn apply_saved(&mut self, result: Result<E, ApiFailure>) -> Result<RowChange, ApiFailure> {
        result.map(|record| self.upsert(record))
    }

    /// Apply the result of a delete. Failures leave the table untouched.
    ///
    /// # Errors
    ///
    /// Returns the request's failure unchanged.
    pub fn apply_deleted(
        &mut self,
        id: RecordId,
        result: Result<(), ApiFailure>,
    ) -> Result<Option<E>, ApiFailure> {
        result.map(|()| self.remove(id))
    }

    /// Apply the result of a ban: the row flips to banned in place.
    /// Returns whether the row was present.
    ///
    /// # Errors
    ///
    /// Returns the request's failure unchanged.
    pub fn apply_banned(&mut self, id: RecordId, result: Result<(), ApiFailure>) -> Result<bool, ApiFailure> {
        result.map(|()| match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                record.mark_banned();
                true
            }
            None => false,
        })
    }
}

/// Console line for a failed list load. Auth failures say so, since the
/// table stays empty until a token is stored.
#[must_use]
pub fn load_failure_message(noun: &str, err: &ApiFailure) -> String {
    if err.is_auth() {
        format!("{noun} list needs a signed-in session: {err}")
    } else {
        format!("{noun} list failed: {err}")
    }
}
