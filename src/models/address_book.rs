//! In-memory address book keyed by contact name.

use super::record::Record;
use crate::domain::NotFoundError;
use std::collections::HashMap;

/// Mapping from a contact's name to its record.
///
/// Records are enumerated in insertion order. Re-adding an existing name
/// replaces the record in place, keeping its position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, overwriting any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name. Absence is not an error.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        Some(&mut self.records[slot])
    }

    /// Remove the record with this exact name.
    pub fn delete(&mut self, name: &str) -> Result<Record, NotFoundError> {
        let slot = self
            .index
            .remove(name)
            .ok_or_else(|| NotFoundError::Record(name.to_string()))?;
        let removed = self.records.remove(slot);

        // Everything after the removed slot shifted down by one.
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }

        Ok(removed)
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.records.iter().map(|r| (r.name().as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
