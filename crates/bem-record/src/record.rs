use bem_schema::{ObjectType, ObjectTypeSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};
use crate::value::Value;

/// One schema-conformant flat record: an ordered run of scalar cells plus
/// zero or more repetitions of the schema's extensible group.
///
/// The scalar cell count always equals the schema's scalar field count and
/// every group repetition has exactly the schema's group width; the
/// constructors and mutators maintain both invariants. A record owns its
/// values and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    object_type: ObjectType,
    scalars: Vec<Value>,
    groups: Vec<Vec<Value>>,
}

impl FlatRecord {
    /// New record with every scalar cell absent and no groups.
    pub fn new(object_type: ObjectType) -> Self {
        let count = schema_for(object_type).num_scalar_fields();
        Self {
            object_type,
            scalars: vec![Value::Absent; count],
            groups: Vec::new(),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn schema(&self) -> &'static ObjectTypeSchema {
        schema_for(self.object_type)
    }

    /// Scalar cell at `index`.
    pub fn value(&self, index: usize) -> Result<&Value> {
        self.scalars
            .get(index)
            .ok_or_else(|| RecordError::field_index_out_of_range(index, self.scalars.len()))
    }

    /// Write the scalar cell at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let count = self.scalars.len();
        match self.scalars.get_mut(index) {
            Some(cell) => {
                *cell = value.into();
                Ok(())
            }
            None => Err(RecordError::field_index_out_of_range(index, count)),
        }
    }

    /// All scalar cells in field-index order.
    pub fn values(&self) -> &[Value] {
        &self.scalars
    }

    /// Name of this record, when the name cell holds text.
    pub fn name(&self) -> Option<&str> {
        let index = self.schema().name_field()?;
        self.scalars[index].text()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        match self.schema().name_field() {
            Some(index) => self.set_value(index, Value::Str(name.into())),
            None => Err(RecordError::field_index_out_of_range(0, 0)),
        }
    }

    /// Append one extensible repetition; returns its group index.
    pub fn push_extensible_group(&mut self, values: Vec<Value>) -> Result<usize> {
        let width = self
            .schema()
            .extensible_group_width()
            .ok_or(RecordError::NoExtensibleGroup { object_type: self.object_type })?;
        if values.len() != width {
            return Err(RecordError::group_width_mismatch(width, values.len()));
        }
        self.groups.push(values);
        Ok(self.groups.len() - 1)
    }

    /// Drop every extensible repetition. Scalar cells are untouched.
    pub fn clear_extensible_groups(&mut self) {
        self.groups.clear();
    }

    pub fn extensible_group_count(&self) -> usize {
        self.groups.len()
    }

    /// Cell `field` of repetition `group`.
    pub fn extensible_group_value(&self, group: usize, field: usize) -> Result<&Value> {
        let values = self.groups.get(group).ok_or(RecordError::GroupIndexOutOfRange {
            index: group,
            count: self.groups.len(),
        })?;
        values
            .get(field)
            .ok_or_else(|| RecordError::field_index_out_of_range(field, values.len()))
    }

    /// All repetitions in push order.
    pub fn extensible_groups(&self) -> impl Iterator<Item = &[Value]> {
        self.groups.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bem_schema::fields::{construction, lights};

    #[test]
    fn new_record_is_all_absent() {
        let record = FlatRecord::new(ObjectType::Lights);
        assert_eq!(record.values().len(), 6);
        assert!(record.values().iter().all(Value::is_absent));
        assert_eq!(record.extensible_group_count(), 0);
    }

    #[test]
    fn set_and_get_scalars() {
        let mut record = FlatRecord::new(ObjectType::Lights);
        record.set_name("L1").unwrap();
        record.set_value(lights::DESIGN_LEVEL, 100.0).unwrap();
        assert_eq!(record.name(), Some("L1"));
        assert_eq!(record.value(lights::DESIGN_LEVEL).unwrap().as_real(), Some(100.0));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut record = FlatRecord::new(ObjectType::Building);
        let err = record.set_value(3, 1.0).unwrap_err();
        assert!(matches!(err, RecordError::FieldIndexOutOfRange { index: 3, count: 3 }));
        assert!(record.value(99).is_err());
    }

    #[test]
    fn group_width_is_enforced() {
        let mut record = FlatRecord::new(ObjectType::Construction);
        let err = record
            .push_extensible_group(vec![Value::Ref("M1".into()), Value::Ref("M2".into())])
            .unwrap_err();
        assert!(matches!(err, RecordError::GroupWidthMismatch { expected: 1, actual: 2 }));

        let index = record.push_extensible_group(vec![Value::Ref("M1".into())]).unwrap();
        assert_eq!(index, 0);
        assert_eq!(
            record.extensible_group_value(0, construction::group::LAYER_MATERIAL_NAME).unwrap(),
            &Value::Ref("M1".into())
        );
    }

    #[test]
    fn groups_on_groupless_schema_are_rejected() {
        let mut record = FlatRecord::new(ObjectType::Zone);
        let err = record.push_extensible_group(vec![Value::Str("x".into())]).unwrap_err();
        assert!(matches!(err, RecordError::NoExtensibleGroup { object_type: ObjectType::Zone }));
    }

    #[test]
    fn clear_groups_leaves_scalars() {
        let mut record = FlatRecord::new(ObjectType::ZoneList);
        record.set_name("ZL").unwrap();
        record.push_extensible_group(vec![Value::Ref("Z1".into())]).unwrap();
        record.push_extensible_group(vec![Value::Ref("Z2".into())]).unwrap();
        record.clear_extensible_groups();
        assert_eq!(record.extensible_group_count(), 0);
        assert_eq!(record.name(), Some("ZL"));
    }
}
