use std::collections::BTreeMap;

use bem_record::{FlatRecord, Value};
use bem_schema::{DefaultValue, FieldKind, ObjectType, ObjectTypeSchema};

use crate::error::{GraphError, Result};
use crate::handle::Handle;

/// One cell of a model-side extensible group push.
///
/// Reference cells carry handles; the owning record keeps an absent
/// placeholder for them until translation emits the referent's name.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupCell {
    Value(Value),
    Reference(Handle),
}

/// Typed, schema-bound view over one flat record inside the graph.
///
/// Scalar data lives in the backing record. Reference fields differ from the
/// flat boundary: the graph side stores weak handles into the owning
/// container, keyed by field position, so referent renames are always
/// observed and deletions surface as dangling handles instead of stale
/// names.
#[derive(Debug)]
pub struct ModelObject {
    handle: Handle,
    record: FlatRecord,
    scalar_refs: BTreeMap<usize, Handle>,
    group_refs: BTreeMap<(usize, usize), Handle>,
}

impl ModelObject {
    pub(crate) fn new(handle: Handle, object_type: ObjectType) -> Self {
        Self {
            handle,
            record: FlatRecord::new(object_type),
            scalar_refs: BTreeMap::new(),
            group_refs: BTreeMap::new(),
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn object_type(&self) -> ObjectType {
        self.record.object_type()
    }

    pub fn schema(&self) -> &'static ObjectTypeSchema {
        self.record.schema()
    }

    /// The backing record. Reference cells in it are placeholders; use the
    /// reference accessors for graph-side identity.
    pub fn record(&self) -> &FlatRecord {
        &self.record
    }

    pub fn name(&self) -> Option<&str> {
        self.record.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.record.set_name(name).map_err(GraphError::from)
    }

    fn check_kind(&self, field: usize, want_reference: bool) -> Result<()> {
        let definition = self
            .schema()
            .field(field)
            .ok_or_else(|| bem_record::RecordError::field_index_out_of_range(
                field,
                self.schema().num_scalar_fields(),
            ))?;
        match (definition.kind == FieldKind::ObjectRef, want_reference) {
            (true, false) => Err(GraphError::IsAReferenceField {
                object_type: self.object_type(),
                index: field,
            }),
            (false, true) => Err(GraphError::NotAReferenceField {
                object_type: self.object_type(),
                index: field,
            }),
            _ => Ok(()),
        }
    }

    /// Scalar cell at `field`. Reference fields read as their placeholder.
    pub fn value(&self, field: usize) -> Result<&Value> {
        self.record.value(field).map_err(GraphError::from)
    }

    /// Write a non-reference scalar field.
    pub fn set_value(&mut self, field: usize, value: impl Into<Value>) -> Result<()> {
        self.check_kind(field, false)?;
        self.record.set_value(field, value).map_err(GraphError::from)
    }

    /// Reset a non-reference scalar field to absent, putting the schema
    /// default back in force.
    pub fn clear_value(&mut self, field: usize) -> Result<()> {
        self.check_kind(field, false)?;
        self.record.set_value(field, Value::Absent).map_err(GraphError::from)
    }

    /// Explicitly-set real value, no default fallback.
    pub fn real(&self, field: usize) -> Option<f64> {
        self.record.value(field).ok().and_then(Value::as_real)
    }

    /// Explicitly-set integer value, no default fallback.
    pub fn int(&self, field: usize) -> Option<i64> {
        self.record.value(field).ok().and_then(Value::as_int)
    }

    /// Explicitly-set text value, no default fallback.
    pub fn string(&self, field: usize) -> Option<&str> {
        self.record.value(field).ok().and_then(Value::text)
    }

    /// Real value with the schema default in force for absent cells.
    pub fn real_or_default(&self, field: usize) -> Option<f64> {
        match self.real(field) {
            Some(v) => Some(v),
            None => match self.schema().field(field)?.default {
                Some(DefaultValue::Real(v)) => Some(v),
                #[allow(clippy::cast_precision_loss)]
                Some(DefaultValue::Int(v)) => Some(v as f64),
                _ => None,
            },
        }
    }

    /// Integer value with the schema default in force for absent cells.
    pub fn int_or_default(&self, field: usize) -> Option<i64> {
        match self.int(field) {
            Some(v) => Some(v),
            None => match self.schema().field(field)?.default {
                Some(DefaultValue::Int(v)) => Some(v),
                _ => None,
            },
        }
    }

    /// True when the cell is absent and a schema default stands in for it.
    pub fn is_defaulted(&self, field: usize) -> bool {
        match self.record.value(field) {
            Ok(value) => value.is_absent() && self.schema().field(field).is_some_and(|f| f.default.is_some()),
            Err(_) => false,
        }
    }

    /// Target of a reference field, if set.
    pub fn reference(&self, field: usize) -> Option<Handle> {
        self.scalar_refs.get(&field).copied()
    }

    /// Point a reference field at `target`.
    pub fn set_reference(&mut self, field: usize, target: Handle) -> Result<()> {
        self.check_kind(field, true)?;
        self.scalar_refs.insert(field, target);
        Ok(())
    }

    /// Unset a reference field.
    pub fn clear_reference(&mut self, field: usize) -> Result<()> {
        self.check_kind(field, true)?;
        self.scalar_refs.remove(&field);
        Ok(())
    }

    /// Set reference fields in field order.
    pub fn references(&self) -> impl Iterator<Item = (usize, Handle)> + '_ {
        self.scalar_refs.iter().map(|(i, h)| (*i, *h))
    }

    pub fn group_count(&self) -> usize {
        self.record.extensible_group_count()
    }

    /// View of one extensible repetition.
    pub fn group(&self, index: usize) -> Option<GroupView<'_>> {
        if index < self.group_count() {
            Some(GroupView { object: self, index })
        } else {
            None
        }
    }

    /// Views of every repetition, in push order.
    pub fn groups(&self) -> impl Iterator<Item = GroupView<'_>> {
        (0..self.group_count()).map(|index| GroupView { object: self, index })
    }

    /// Append one extensible repetition; returns its group index.
    ///
    /// Mutates only the extensible sequence of the owning record, never the
    /// scalar fields.
    pub fn push_group(&mut self, cells: Vec<GroupCell>) -> Result<usize> {
        let schema = self.schema();
        let mut values = Vec::with_capacity(cells.len());
        let mut handles: Vec<(usize, Handle)> = Vec::new();
        for (field, cell) in cells.into_iter().enumerate() {
            match cell {
                GroupCell::Value(value) => values.push(value),
                GroupCell::Reference(handle) => {
                    if !schema.group_field(field).is_some_and(|f| f.is_reference()) {
                        return Err(GraphError::NotAReferenceField {
                            object_type: self.object_type(),
                            index: field,
                        });
                    }
                    values.push(Value::Absent);
                    handles.push((field, handle));
                }
            }
        }
        let index = self.record.push_extensible_group(values)?;
        for (field, handle) in handles {
            self.group_refs.insert((index, field), handle);
        }
        Ok(index)
    }

    /// Drop every repetition and its reference handles.
    pub fn clear_groups(&mut self) {
        self.record.clear_extensible_groups();
        self.group_refs.clear();
    }

    /// Target of a reference cell inside a repetition, if set.
    pub fn group_reference(&self, group: usize, field: usize) -> Option<Handle> {
        self.group_refs.get(&(group, field)).copied()
    }

    /// Point a reference cell inside an existing repetition at `target`.
    pub fn set_group_reference(&mut self, group: usize, field: usize, target: Handle) -> Result<()> {
        // Validates both indices against the current record shape.
        self.record.extensible_group_value(group, field)?;
        if !self.schema().group_field(field).is_some_and(|f| f.is_reference()) {
            return Err(GraphError::NotAReferenceField {
                object_type: self.object_type(),
                index: field,
            });
        }
        self.group_refs.insert((group, field), target);
        Ok(())
    }
}

/// Lightweight view addressing one extensible repetition by index.
#[derive(Debug, Clone, Copy)]
pub struct GroupView<'a> {
    object: &'a ModelObject,
    index: usize,
}

impl<'a> GroupView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> usize {
        self.object.schema().extensible_group_width().unwrap_or(0)
    }

    /// Cell value at `field`. Reference cells read as their placeholder.
    pub fn value(&self, field: usize) -> Option<&'a Value> {
        self.object.record.extensible_group_value(self.index, field).ok()
    }

    /// Reference target at `field`, if set.
    pub fn reference(&self, field: usize) -> Option<Handle> {
        self.object.group_reference(self.index, field)
    }
}
