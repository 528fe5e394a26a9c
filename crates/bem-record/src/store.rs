use std::collections::BTreeMap;

use bem_schema::ObjectType;
use serde::{Deserialize, Serialize};

use crate::error::OrderError;
use crate::order::TypeOrder;
use crate::record::FlatRecord;

/// Stable identity of a record inside one [`RecordStore`] session.
///
/// Handles are assigned from a monotonic counter at creation and never
/// reused after removal, so a stale handle simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordHandle(u64);

/// Insertion-ordered container of flat records with stable handles.
///
/// The store never reorders records on its own; serialization order is an
/// explicit query against a [`TypeOrder`].
#[derive(Debug, Default)]
pub struct RecordStore {
    // Monotonic handles make the BTreeMap iterate in insertion order.
    records: BTreeMap<RecordHandle, FlatRecord>,
    next: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record of `object_type` and hand back its identity.
    pub fn create(&mut self, object_type: ObjectType) -> RecordHandle {
        self.insert(FlatRecord::new(object_type))
    }

    /// Take ownership of an existing record.
    pub fn insert(&mut self, record: FlatRecord) -> RecordHandle {
        let handle = RecordHandle(self.next);
        self.next += 1;
        self.records.insert(handle, record);
        handle
    }

    pub fn get(&self, handle: RecordHandle) -> Option<&FlatRecord> {
        self.records.get(&handle)
    }

    pub fn get_mut(&mut self, handle: RecordHandle) -> Option<&mut FlatRecord> {
        self.records.get_mut(&handle)
    }

    /// Remove a record. Its handle is dead for the rest of the session.
    pub fn remove(&mut self, handle: RecordHandle) -> Option<FlatRecord> {
        self.records.remove(&handle)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordHandle, &FlatRecord)> {
        self.records.iter().map(|(h, r)| (*h, r))
    }

    /// Handles sorted for serialization: by `order` across types, insertion
    /// order within a type. Fails only when the order is externally managed.
    pub fn serialization_order(&self, order: &TypeOrder) -> Result<Vec<RecordHandle>, OrderError> {
        if order.is_externally_managed() {
            return Err(OrderError::OrderNotOwned);
        }
        let mut handles: Vec<(RecordHandle, ObjectType)> =
            self.iter().map(|(h, r)| (h, r.object_type())).collect();
        handles.sort_by(|(ha, ta), (hb, tb)| {
            let key_a = order.index_in_order(*ta).unwrap_or(usize::MAX);
            let key_b = order.index_in_order(*tb).unwrap_or(usize::MAX);
            key_a.cmp(&key_b).then(ha.cmp(hb))
        });
        Ok(handles.into_iter().map(|(h, _)| h).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn handles_are_never_reused() {
        let mut store = RecordStore::new();
        let a = store.create(ObjectType::Zone);
        store.remove(a);
        let b = store.create(ObjectType::Zone);
        assert_ne!(a, b);
        assert!(store.get(a).is_none());
        assert!(store.get(b).is_some());
    }

    #[test]
    fn iteration_is_insertion_order() {
        let mut store = RecordStore::new();
        let z = store.create(ObjectType::Zone);
        let b = store.create(ObjectType::Building);
        let l = store.create(ObjectType::Lights);
        let seen: Vec<RecordHandle> = store.iter().map(|(h, _)| h).collect();
        assert_eq!(seen, vec![z, b, l]);
    }

    #[test]
    fn serialization_order_sorts_by_type_order() {
        let mut store = RecordStore::new();
        let l = store.create(ObjectType::Lights);
        let b = store.create(ObjectType::Building);
        let z1 = store.create(ObjectType::Zone);
        let z2 = store.create(ObjectType::Zone);

        // Declared order: Building < Zone < Lights.
        let declared = TypeOrder::by_declared_order();
        assert_eq!(store.serialization_order(&declared).unwrap(), vec![b, z1, z2, l]);

        // Explicit order puts Lights first; Building is unlisted and sorts last.
        let explicit = TypeOrder::from_list(vec![ObjectType::Lights, ObjectType::Zone]);
        assert_eq!(store.serialization_order(&explicit).unwrap(), vec![l, z1, z2, b]);
    }

    #[test]
    fn serialization_order_rejects_external_management() {
        let mut store = RecordStore::new();
        store.create(ObjectType::Zone);
        let order = TypeOrder::externally_managed();
        assert_eq!(store.serialization_order(&order).unwrap_err(), OrderError::OrderNotOwned);
    }

    #[test]
    fn mutation_through_store_sticks() {
        let mut store = RecordStore::new();
        let h = store.create(ObjectType::Building);
        store.get_mut(h).unwrap().set_name("Main").unwrap();
        assert_eq!(store.get(h).unwrap().name(), Some("Main"));
        assert_eq!(store.get(h).unwrap().value(1).unwrap(), &Value::Absent);
    }
}
