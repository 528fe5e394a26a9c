//! Deterministic, mutable ordering of object types for serialization.
//!
//! The order is consulted only when a record collection is written out;
//! translators never look at it. Three mutually exclusive modes:
//!
//! - **Declared order** (initial): the catalog's declaration order, answered
//!   without materializing a list.
//! - **Explicit list**: a caller-managed permutation, mutated through the
//!   push/insert/move/swap/erase operations below.
//! - **Externally managed**: a caller has taken over comparison entirely;
//!   ordering queries here fail with [`OrderError::OrderNotOwned`].
//!
//! Setting any mode clears the others.

use bem_schema::ObjectType;

use crate::error::OrderError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Declared,
    Explicit(Vec<ObjectType>),
    External,
}

/// Serialization order of object types. See the module docs for the modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOrder {
    mode: Mode,
}

impl Default for TypeOrder {
    fn default() -> Self {
        Self::by_declared_order()
    }
}

impl TypeOrder {
    /// Catalog declaration order.
    pub fn by_declared_order() -> Self {
        Self { mode: Mode::Declared }
    }

    /// Explicit permutation, ordered as given.
    pub fn from_list(list: Vec<ObjectType>) -> Self {
        Self { mode: Mode::Explicit(list) }
    }

    /// Caller-owned comparison; queries fail until another mode is set.
    pub fn externally_managed() -> Self {
        Self { mode: Mode::External }
    }

    pub fn set_declared_order(&mut self) {
        self.mode = Mode::Declared;
    }

    pub fn set_list(&mut self, list: Vec<ObjectType>) {
        self.mode = Mode::Explicit(list);
    }

    pub fn set_externally_managed(&mut self) {
        self.mode = Mode::External;
    }

    pub fn is_declared_order(&self) -> bool {
        self.mode == Mode::Declared
    }

    pub fn is_externally_managed(&self) -> bool {
        self.mode == Mode::External
    }

    /// The explicit list, when in that mode.
    pub fn list(&self) -> Option<&[ObjectType]> {
        match &self.mode {
            Mode::Explicit(list) => Some(list),
            _ => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut Vec<ObjectType>> {
        match &mut self.mode {
            Mode::Explicit(list) => Some(list),
            _ => None,
        }
    }

    /// Append `object_type`. False outside explicit mode or when already
    /// listed; the list size changes only on success.
    pub fn push_back(&mut self, object_type: ObjectType) -> bool {
        match self.list_mut() {
            Some(list) if !list.contains(&object_type) => {
                list.push(object_type);
                true
            }
            _ => false,
        }
    }

    /// Insert `object_type` immediately before `before`. An absent anchor
    /// appends at the end rather than failing, so importers need not
    /// validate their anchors.
    pub fn insert_before(&mut self, object_type: ObjectType, before: ObjectType) -> bool {
        match self.list_mut() {
            Some(list) if !list.contains(&object_type) => {
                let at = list.iter().position(|t| *t == before).unwrap_or(list.len());
                list.insert(at, object_type);
                true
            }
            _ => false,
        }
    }

    /// Insert `object_type` at `index`, clamping an out-of-range index to
    /// append-at-end.
    pub fn insert_at(&mut self, object_type: ObjectType, index: usize) -> bool {
        match self.list_mut() {
            Some(list) if !list.contains(&object_type) => {
                let at = index.min(list.len());
                list.insert(at, object_type);
                true
            }
            _ => false,
        }
    }

    /// Relocate `object_type` immediately before `before`, preserving all
    /// other relative order. Fails when either type is absent or the two
    /// are the same.
    pub fn move_before(&mut self, object_type: ObjectType, before: ObjectType) -> bool {
        if object_type == before {
            return false;
        }
        let Some(list) = self.list_mut() else {
            return false;
        };
        let Some(from) = list.iter().position(|t| *t == object_type) else {
            return false;
        };
        if !list.contains(&before) {
            return false;
        }
        list.remove(from);
        let to = list.iter().position(|t| *t == before).unwrap_or(list.len());
        list.insert(to, object_type);
        true
    }

    /// Relocate `object_type` to `index`, clamping overflow to the end.
    pub fn move_to(&mut self, object_type: ObjectType, index: usize) -> bool {
        let Some(list) = self.list_mut() else {
            return false;
        };
        let Some(from) = list.iter().position(|t| *t == object_type) else {
            return false;
        };
        list.remove(from);
        let to = index.min(list.len());
        list.insert(to, object_type);
        true
    }

    /// Exchange the positions of `a` and `b`, failing if either is absent.
    pub fn swap(&mut self, a: ObjectType, b: ObjectType) -> bool {
        let Some(list) = self.list_mut() else {
            return false;
        };
        let (Some(i), Some(j)) = (
            list.iter().position(|t| *t == a),
            list.iter().position(|t| *t == b),
        ) else {
            return false;
        };
        list.swap(i, j);
        true
    }

    /// Remove `object_type`, failing (false) when absent.
    pub fn erase(&mut self, object_type: ObjectType) -> bool {
        let Some(list) = self.list_mut() else {
            return false;
        };
        match list.iter().position(|t| *t == object_type) {
            Some(at) => {
                list.remove(at);
                true
            }
            None => false,
        }
    }

    /// Position of `object_type` in the current order.
    ///
    /// Declared mode answers from the catalog without materializing a list;
    /// explicit mode answers `None` for unlisted types; externally managed
    /// mode always answers `None`.
    pub fn index_in_order(&self, object_type: ObjectType) -> Option<usize> {
        match &self.mode {
            Mode::Declared => Some(object_type.declared_index()),
            Mode::Explicit(list) => list.iter().position(|t| *t == object_type),
            Mode::External => None,
        }
    }

    /// Total order consistent with [`TypeOrder::index_in_order`]; unlisted
    /// types sort after listed ones and are unordered among themselves.
    pub fn less(&self, a: ObjectType, b: ObjectType) -> Result<bool, OrderError> {
        if self.is_externally_managed() {
            return Err(OrderError::OrderNotOwned);
        }
        let key_a = self.index_in_order(a).unwrap_or(usize::MAX);
        let key_b = self.index_in_order(b).unwrap_or(usize::MAX);
        Ok(key_a < key_b)
    }
}
