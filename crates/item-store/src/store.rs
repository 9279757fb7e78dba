//! Item Store
//!
//! Owns the immutable master list and the displayed list derived from it.
//! Every command replaces the displayed list wholesale and publishes the
//! new snapshot. Commands never fail; out-of-range requests are no-ops.

use std::collections::HashSet;
use std::rc::Rc;

use crate::observable::{Observable, Subscription};
use crate::order::SortOrder;
use crate::record::{Keyed, Record};

/// Read-only view of the displayed list handed to observers
pub type Snapshot = Rc<[Record]>;

#[derive(Debug)]
pub struct ItemStore {
    master: Snapshot,
    displayed: Observable<Snapshot>,
}

impl ItemStore {
    /// Create a store whose displayed list starts equal to `master`.
    ///
    /// Records whose name repeats an earlier one are dropped so the name
    /// stays a unique row key.
    pub fn new(master: Vec<Record>) -> Self {
        let mut seen = HashSet::new();
        let total = master.len();
        let master: Vec<Record> = master
            .into_iter()
            .filter(|record| seen.insert(record.name.clone()))
            .collect();
        if master.len() != total {
            log::warn!(
                "[ItemStore] dropped {} records with duplicate names",
                total - master.len()
            );
        }

        let master: Snapshot = master.into();
        log::debug!("[ItemStore] created with {} records", master.len());
        Self {
            displayed: Observable::new(Rc::clone(&master)),
            master,
        }
    }

    pub fn master(&self) -> &[Record] {
        &self.master
    }

    /// Current displayed list
    pub fn read(&self) -> Snapshot {
        self.displayed.read()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of master records not currently displayed
    pub fn remaining(&self) -> usize {
        self.master.len() - self.len()
    }

    /// Observe the displayed list; the callback sees the current list first
    pub fn subscribe(&self, callback: impl Fn(&Snapshot) + 'static) -> Subscription {
        self.displayed.subscribe(callback)
    }

    /// Restore master order for the records still displayed.
    /// Removed records are not brought back.
    pub fn reset(&mut self) {
        let current = self.read();
        let present: HashSet<&str> = current.iter().map(Keyed::key).collect();
        let restored: Vec<Record> = self
            .master
            .iter()
            .filter(|record| present.contains(record.key()))
            .cloned()
            .collect();
        log::debug!("[ItemStore] reset: {} records in master order", restored.len());
        self.publish(restored);
    }

    pub fn sort_by_name(&mut self) {
        let mut sorted = self.read().to_vec();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("[ItemStore] sort by name");
        self.publish(sorted);
    }

    pub fn sort_by_amount(&mut self) {
        let mut sorted = self.read().to_vec();
        sorted.sort_by_key(|record| record.amount);
        log::debug!("[ItemStore] sort by amount");
        self.publish(sorted);
    }

    /// Append the first master record (master order) that is not displayed
    pub fn add_item(&mut self) {
        let current = self.read();
        let present: HashSet<&str> = current.iter().map(Keyed::key).collect();
        let Some(next) = self
            .master
            .iter()
            .find(|record| !present.contains(record.key()))
        else {
            log::debug!("[ItemStore] add: every record already displayed");
            return;
        };

        log::debug!("[ItemStore] add: {}", next.name);
        let mut updated = current.to_vec();
        updated.push(next.clone());
        self.publish(updated);
    }

    /// Drop the last displayed record
    pub fn remove_item(&mut self) {
        let current = self.read();
        let Some((last, rest)) = current.split_last() else {
            log::debug!("[ItemStore] remove: list already empty");
            return;
        };

        log::debug!("[ItemStore] remove: {}", last.name);
        self.publish(rest.to_vec());
    }

    /// Run the command behind an ordering option
    pub fn apply_order(&mut self, order: SortOrder) {
        match order {
            SortOrder::Original => self.reset(),
            SortOrder::Name => self.sort_by_name(),
            SortOrder::Amount => self.sort_by_amount(),
        }
    }

    fn publish(&self, records: Vec<Record>) {
        self.displayed.publish(records.into());
    }
}
