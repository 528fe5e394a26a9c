use serde::Serialize;

use crate::object_type::ObjectType;

/// Value kind a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    Str,
    Real,
    Int,
    Choice,
    /// Holds the *name* of another object at the flat boundary and a weak
    /// handle on the graph side.
    ObjectRef,
}

/// Default literal attached to an optional field.
///
/// Kept separate from the record-level value type so the schema crate stays
/// at the bottom of the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DefaultValue {
    Str(&'static str),
    Real(f64),
    Int(i64),
    Choice(&'static str),
}

/// One field of an object schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDefinition {
    /// Zero-based position. Scalar field indices are contiguous from 0;
    /// inside an extensible group they restart from 0 per repetition.
    pub index: usize,
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<DefaultValue>,
    /// Physical unit of a real field, when it carries one (e.g. `"W"`, `"m"`).
    pub unit_hint: Option<&'static str>,
    /// Allowed target types of an `ObjectRef` field; empty otherwise.
    pub target_types: &'static [ObjectType],
}

impl FieldDefinition {
    pub const fn new(index: usize, name: &'static str, kind: FieldKind) -> Self {
        Self {
            index,
            name,
            kind,
            required: false,
            default: None,
            unit_hint: None,
            target_types: &[],
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        self.unit_hint = Some(unit);
        self
    }

    pub const fn referencing(mut self, targets: &'static [ObjectType]) -> Self {
        self.target_types = targets;
        self
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.kind, FieldKind::ObjectRef)
    }
}

/// The repeatable trailing field group of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtensibleGroup {
    /// Fixed width of one repetition.
    pub width: usize,
    /// Field definitions for one repetition, indexed 0..width.
    pub fields: &'static [FieldDefinition],
}

/// Complete schema of one object type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectTypeSchema {
    pub object_type: ObjectType,
    /// Scalar (non-extensible) fields, indexed 0..len.
    pub fields: &'static [FieldDefinition],
    /// At most one extensible group, always trailing the scalar fields.
    pub extensible: Option<ExtensibleGroup>,
}

impl ObjectTypeSchema {
    /// Number of scalar fields.
    pub fn num_scalar_fields(&self) -> usize {
        self.fields.len()
    }

    /// Scalar field definition at `index`, if in range.
    pub fn field(&self, index: usize) -> Option<&'static FieldDefinition> {
        self.fields.get(index)
    }

    /// Field definition at position `field` within one extensible repetition.
    pub fn group_field(&self, field: usize) -> Option<&'static FieldDefinition> {
        self.extensible.as_ref().and_then(|g| g.fields.get(field))
    }

    /// Width of the extensible group, if the schema has one.
    pub fn extensible_group_width(&self) -> Option<usize> {
        self.extensible.as_ref().map(|g| g.width)
    }

    /// Index of the name field. Every type in the catalog names its objects
    /// through field 0; the accessor keeps that convention in one place.
    pub fn name_field(&self) -> Option<usize> {
        match self.fields.first() {
            Some(f) if f.name == "Name" => Some(0),
            _ => None,
        }
    }
}
