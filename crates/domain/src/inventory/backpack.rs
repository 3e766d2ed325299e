//! Backpack state - unequipped holdings as an ordered multiset

use crate::events::BackpackChange;
use crate::value_objects::QuantityChangeResult;

/// One backpack line: an id and how many units are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackpackEntry<Id> {
    pub id: Id,
    pub quantity: u32,
}

/// Unequipped holdings of one category, in the order they were first added.
///
/// # Invariants
///
/// - Every entry has `quantity > 0`; depleted entries are removed, never stored
/// - An id appears at most once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backpack<Id> {
    entries: Vec<BackpackEntry<Id>>,
}

impl<Id> Default for Backpack<Id> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<Id: Clone + PartialEq> Backpack<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backpack from raw `(id, quantity)` pairs, restoring the
    /// invariants: duplicates merge into the first occurrence and zero
    /// quantities are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (Id, u32)>) -> Self {
        let mut backpack = Self::new();
        for (id, quantity) in entries {
            if quantity == 0 {
                continue;
            }
            match backpack.position(&id) {
                Some(idx) => {
                    let entry = &mut backpack.entries[idx];
                    entry.quantity = entry.quantity.saturating_add(quantity);
                }
                None => backpack.entries.push(BackpackEntry { id, quantity }),
            }
        }
        backpack
    }

    fn position(&self, id: &Id) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Units of `id` carried (0 when absent).
    pub fn quantity(&self, id: &Id) -> u32 {
        self.position(id)
            .map(|idx| self.entries[idx].quantity)
            .unwrap_or(0)
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.position(id).is_some()
    }

    pub fn entries(&self) -> &[BackpackEntry<Id>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackpackEntry<Id>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Put one unit in, stacking onto an existing entry or appending a new one.
    pub fn add_one(&mut self, id: Id) -> BackpackChange {
        match self.position(&id) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                let from = entry.quantity;
                entry.quantity = from.saturating_add(1);
                BackpackChange::Updated {
                    from,
                    to: entry.quantity,
                }
            }
            None => {
                self.entries.push(BackpackEntry { id, quantity: 1 });
                BackpackChange::Added { quantity: 1 }
            }
        }
    }

    /// Take one unit out. `None` when the id is not carried.
    pub fn remove_one(&mut self, id: &Id) -> Option<QuantityChangeResult> {
        let idx = self.position(id)?;
        let result = QuantityChangeResult::subtract(self.entries[idx].quantity, 1);
        match result.new_quantity() {
            Some(quantity) => self.entries[idx].quantity = quantity,
            None => {
                self.entries.remove(idx);
            }
        }
        Some(result)
    }

    /// Overwrite the quantity of an existing entry; zero removes it.
    ///
    /// Absent ids stay absent: the counter only exists for listed entries.
    pub fn set_quantity(&mut self, id: &Id, quantity: u32) -> BackpackChange {
        let Some(idx) = self.position(id) else {
            return BackpackChange::Unchanged;
        };
        let from = self.entries[idx].quantity;
        if quantity == 0 {
            self.entries.remove(idx);
            BackpackChange::Removed { previous: from }
        } else if quantity == from {
            BackpackChange::Unchanged
        } else {
            self.entries[idx].quantity = quantity;
            BackpackChange::Updated { from, to: quantity }
        }
    }

    /// Drop the whole entry for `id`, returning how many units it held.
    pub fn remove(&mut self, id: &Id) -> Option<u32> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx).quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(entries: &[(&'static str, u32)]) -> Backpack<&'static str> {
        Backpack::from_entries(entries.iter().copied())
    }

    #[test]
    fn from_entries_merges_duplicates_and_drops_zero() {
        let backpack = pack(&[("rope", 1), ("torch", 0), ("rope", 2), ("ration", 3)]);
        assert_eq!(backpack.len(), 2);
        assert_eq!(backpack.quantity(&"rope"), 3);
        assert_eq!(backpack.quantity(&"ration"), 3);
        assert!(!backpack.contains(&"torch"));
        assert_eq!(backpack.entries()[0].id, "rope");
    }

    #[test]
    fn add_one_stacks_or_appends() {
        let mut backpack = pack(&[("rope", 1)]);
        assert_eq!(
            backpack.add_one("rope"),
            BackpackChange::Updated { from: 1, to: 2 }
        );
        assert_eq!(backpack.add_one("torch"), BackpackChange::Added { quantity: 1 });
        assert_eq!(backpack.entries()[1].id, "torch");
    }

    #[test]
    fn remove_one_deletes_depleted_entry() {
        let mut backpack = pack(&[("rope", 2)]);
        assert_eq!(
            backpack.remove_one(&"rope"),
            Some(QuantityChangeResult::Updated(1))
        );
        assert_eq!(
            backpack.remove_one(&"rope"),
            Some(QuantityChangeResult::Depleted)
        );
        assert!(backpack.is_empty());
        assert_eq!(backpack.remove_one(&"rope"), None);
    }

    #[test]
    fn set_quantity_zero_removes() {
        let mut backpack = pack(&[("rope", 2)]);
        assert_eq!(
            backpack.set_quantity(&"rope", 0),
            BackpackChange::Removed { previous: 2 }
        );
        assert!(backpack.is_empty());
    }

    #[test]
    fn set_quantity_ignores_absent_ids() {
        let mut backpack = pack(&[("rope", 2)]);
        assert_eq!(backpack.set_quantity(&"torch", 4), BackpackChange::Unchanged);
        assert!(!backpack.contains(&"torch"));
    }

    #[test]
    fn set_quantity_updates_existing() {
        let mut backpack = pack(&[("rope", 2)]);
        assert_eq!(
            backpack.set_quantity(&"rope", 5),
            BackpackChange::Updated { from: 2, to: 5 }
        );
        assert_eq!(backpack.set_quantity(&"rope", 5), BackpackChange::Unchanged);
    }
}
