use crate::{AnyId, InsertOutcome, KindTag, Record, Store};
use core::convert::Infallible;
use std::collections::HashMap;

/// An in-process [`Store`] that keeps every record in memory.
///
/// Lookups go through a hash index; a separate key list preserves insertion
/// order for [`Store::all`]. Never fails.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: HashMap<AnyId, Record>,
    order: Vec<AnyId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `records`, keeping the first record
    /// for any repeated key.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut store = Self::new();
        for record in records {
            let key = record.key();
            if !store.records.contains_key(&key) {
                store.order.push(key);
                store.records.insert(key, record);
            }
        }
        store
    }

    /// Total number of records across all kinds.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store for MemoryStore {
    type Error = Infallible;

    fn contains(&self, key: AnyId) -> Result<bool, Infallible> {
        Ok(self.records.contains_key(&key))
    }

    fn insert(&mut self, record: Record) -> Result<InsertOutcome, Infallible> {
        let key = record.key();
        if self.records.contains_key(&key) {
            return Ok(InsertOutcome::AlreadyExists);
        }
        self.records.insert(key, record);
        self.order.push(key);
        Ok(InsertOutcome::Inserted)
    }

    fn update(&mut self, record: Record) -> Result<bool, Infallible> {
        match self.records.get_mut(&record.key()) {
            Some(stored) => {
                *stored = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn get(&self, key: AnyId) -> Result<Option<Record>, Infallible> {
        Ok(self.records.get(&key).cloned())
    }

    fn all(&self, kind: KindTag) -> Result<Vec<Record>, Infallible> {
        Ok(self
            .order
            .iter()
            .filter(|key| key.kind() == kind)
            .filter_map(|key| self.records.get(key).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Container, ContainerId, Item, ItemId};

    fn container(raw: u64, title: &str) -> Record {
        Container::new(ContainerId::from_raw(raw), title).into()
    }

    #[test]
    fn insert_never_overwrites() {
        let mut store = MemoryStore::new();
        assert_eq!(store.insert(container(1, "first")), Ok(InsertOutcome::Inserted));
        assert_eq!(
            store.insert(container(1, "second")),
            Ok(InsertOutcome::AlreadyExists)
        );

        let stored = store.get(ContainerId::from_raw(1).erase()).unwrap();
        assert_eq!(stored, Some(container(1, "first")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn same_raw_value_under_different_kinds_are_separate_records() {
        let mut store = MemoryStore::new();
        store.insert(container(7, "box")).unwrap();
        let item = Item::new(ItemId::from_raw(7), "cup", ContainerId::from_raw(7));
        assert_eq!(store.insert(item.into()), Ok(InsertOutcome::Inserted));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn all_preserves_insertion_order_per_kind() {
        let mut store = MemoryStore::new();
        for raw in [30, 10, 20] {
            store.insert(container(raw, "c")).unwrap();
            let item = Item::new(ItemId::from_raw(raw + 1), "i", ContainerId::from_raw(raw));
            store.insert(item.into()).unwrap();
        }

        let keys: Vec<_> = store
            .all(KindTag::Container)
            .unwrap()
            .iter()
            .map(|record| record.key().raw())
            .collect();
        assert_eq!(keys, [30, 10, 20]);
        assert_eq!(store.all(KindTag::Item).unwrap().len(), 3);
    }

    #[test]
    fn update_requires_an_existing_record() {
        let mut store = MemoryStore::new();
        assert_eq!(store.update(container(1, "ghost")), Ok(false));
        assert!(store.is_empty());

        store.insert(container(1, "old")).unwrap();
        assert_eq!(store.update(container(1, "new")), Ok(true));
        assert_eq!(
            store.get(ContainerId::from_raw(1).erase()),
            Ok(Some(container(1, "new")))
        );
    }

    #[test]
    fn with_records_keeps_the_first_duplicate() {
        let store = MemoryStore::with_records([container(1, "a"), container(1, "b")]);
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(ContainerId::from_raw(1).erase()),
            Ok(Some(container(1, "a")))
        );
    }
}
