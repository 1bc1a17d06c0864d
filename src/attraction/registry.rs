use std::collections::HashMap;

use super::record::{AttractionHandle, AttractionOptions, AttractionRecord};

/// How a register/unregister call moved the registry across zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// Went from empty to one record
    BecameActive,
    /// Last record removed
    BecameEmpty,
    Unchanged,
}

/// Handle -> record map. Visit order is unspecified.
#[derive(Debug)]
pub struct AttractionRegistry<T> {
    records: HashMap<AttractionHandle, AttractionRecord<T>>,
    next_handle: u64,
}

impl<T> Default for AttractionRegistry<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            next_handle: 0,
        }
    }
}

impl<T> AttractionRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record for `target`, filling in default strength/radius
    pub fn register(
        &mut self,
        target: T,
        options: AttractionOptions,
    ) -> (AttractionHandle, Occupancy) {
        let handle = AttractionHandle(self.next_handle);
        self.next_handle += 1;

        let was_empty = self.records.is_empty();
        self.records
            .insert(handle, AttractionRecord::new(target, options));

        let occupancy = if was_empty {
            Occupancy::BecameActive
        } else {
            Occupancy::Unchanged
        };
        (handle, occupancy)
    }

    /// Remove a record. Unknown or already-removed handles are ignored.
    pub fn unregister(&mut self, handle: AttractionHandle) -> Occupancy {
        if self.records.remove(&handle).is_some() && self.records.is_empty() {
            Occupancy::BecameEmpty
        } else {
            Occupancy::Unchanged
        }
    }

    pub fn get(&self, handle: AttractionHandle) -> Option<&AttractionRecord<T>> {
        self.records.get(&handle)
    }

    #[cfg(test)]
    pub fn contains(&self, handle: AttractionHandle) -> bool {
        self.records.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut AttractionRecord<T>> {
        self.records.values_mut()
    }
}
