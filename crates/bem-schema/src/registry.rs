//! Process-wide schema catalog.
//!
//! The catalog is compiled in and immutable: translators pattern-match
//! against a contract that cannot shift under them at runtime. The registry
//! is built (and its invariants checked) once, on first access.

use std::sync::OnceLock;

use crate::field::{DefaultValue, ExtensibleGroup, FieldDefinition, FieldKind, ObjectTypeSchema};
use crate::object_type::ObjectType;

const fn string(index: usize, name: &'static str) -> FieldDefinition {
    FieldDefinition::new(index, name, FieldKind::Str)
}

const fn real(index: usize, name: &'static str) -> FieldDefinition {
    FieldDefinition::new(index, name, FieldKind::Real)
}

const fn int(index: usize, name: &'static str) -> FieldDefinition {
    FieldDefinition::new(index, name, FieldKind::Int)
}

const fn choice(index: usize, name: &'static str) -> FieldDefinition {
    FieldDefinition::new(index, name, FieldKind::Choice)
}

const fn object_ref(
    index: usize,
    name: &'static str,
    targets: &'static [ObjectType],
) -> FieldDefinition {
    FieldDefinition::new(index, name, FieldKind::ObjectRef).referencing(targets)
}

static BUILDING_FIELDS: [FieldDefinition; 3] = [
    string(0, "Name").required(),
    real(1, "North Axis")
        .with_default(DefaultValue::Real(0.0))
        .with_unit("deg"),
    choice(2, "Terrain").with_default(DefaultValue::Choice("Suburbs")),
];

static ZONE_FIELDS: [FieldDefinition; 4] = [
    string(0, "Name").required(),
    int(1, "Multiplier").with_default(DefaultValue::Int(1)),
    real(2, "Ceiling Height").with_unit("m"),
    real(3, "Volume").with_unit("m^3"),
];

static ZONE_LIST_FIELDS: [FieldDefinition; 1] = [string(0, "Name").required()];

static ZONE_LIST_GROUP: [FieldDefinition; 1] =
    [object_ref(0, "Zone Name", &[ObjectType::Zone]).required()];

static RUN_PERIOD_FIELDS: [FieldDefinition; 5] = [
    string(0, "Name").required(),
    int(1, "Begin Month").required(),
    int(2, "Begin Day of Month").required(),
    int(3, "End Month").required(),
    int(4, "End Day of Month").required(),
];

static SCHEDULE_COMPACT_FIELDS: [FieldDefinition; 1] = [string(0, "Name").required()];

static SCHEDULE_COMPACT_GROUP: [FieldDefinition; 1] = [string(0, "Field Value")];

static MATERIAL_FIELDS: [FieldDefinition; 4] = [
    string(0, "Name").required(),
    choice(1, "Roughness").with_default(DefaultValue::Choice("MediumRough")),
    real(2, "Thickness").required().with_unit("m"),
    real(3, "Conductivity").required().with_unit("W/m-K"),
];

static CONSTRUCTION_FIELDS: [FieldDefinition; 1] = [string(0, "Name").required()];

static CONSTRUCTION_GROUP: [FieldDefinition; 1] =
    [object_ref(0, "Layer Material Name", &[ObjectType::Material]).required()];

static LIGHTS_FIELDS: [FieldDefinition; 6] = [
    string(0, "Name").required(),
    object_ref(1, "Zone or ZoneList Name", &[ObjectType::Zone, ObjectType::ZoneList]).required(),
    object_ref(2, "Schedule Name", &[ObjectType::ScheduleCompact]),
    real(3, "Design Level").with_unit("W"),
    real(4, "Multiplier").with_default(DefaultValue::Real(1.0)),
    real(5, "Fraction Radiant").with_default(DefaultValue::Real(0.0)),
];

static ELECTRIC_EQUIPMENT_FIELDS: [FieldDefinition; 7] = [
    string(0, "Name").required(),
    object_ref(1, "Zone or ZoneList Name", &[ObjectType::Zone, ObjectType::ZoneList]).required(),
    object_ref(2, "Schedule Name", &[ObjectType::ScheduleCompact]),
    real(3, "Design Level").with_unit("W"),
    real(4, "Multiplier").with_default(DefaultValue::Real(1.0)),
    real(5, "Fraction Latent").with_default(DefaultValue::Real(0.0)),
    real(6, "Fraction Lost").with_default(DefaultValue::Real(0.0)),
];

static EQUIPMENT_LIST_FIELDS: [FieldDefinition; 2] = [
    string(0, "Name").required(),
    choice(1, "Load Distribution Scheme").with_default(DefaultValue::Choice("SequentialLoad")),
];

static EQUIPMENT_LIST_GROUP: [FieldDefinition; 3] = [
    object_ref(0, "Equipment Name", &[ObjectType::Lights, ObjectType::ElectricEquipment])
        .required(),
    int(1, "Cooling Sequence"),
    int(2, "Heating Sequence"),
];

static SCHEMAS: [ObjectTypeSchema; ObjectType::COUNT] = [
    ObjectTypeSchema {
        object_type: ObjectType::Building,
        fields: &BUILDING_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::Zone,
        fields: &ZONE_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::ZoneList,
        fields: &ZONE_LIST_FIELDS,
        extensible: Some(ExtensibleGroup { width: 1, fields: &ZONE_LIST_GROUP }),
    },
    ObjectTypeSchema {
        object_type: ObjectType::RunPeriod,
        fields: &RUN_PERIOD_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::ScheduleCompact,
        fields: &SCHEDULE_COMPACT_FIELDS,
        extensible: Some(ExtensibleGroup { width: 1, fields: &SCHEDULE_COMPACT_GROUP }),
    },
    ObjectTypeSchema {
        object_type: ObjectType::Material,
        fields: &MATERIAL_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::Construction,
        fields: &CONSTRUCTION_FIELDS,
        extensible: Some(ExtensibleGroup { width: 1, fields: &CONSTRUCTION_GROUP }),
    },
    ObjectTypeSchema {
        object_type: ObjectType::Lights,
        fields: &LIGHTS_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::ElectricEquipment,
        fields: &ELECTRIC_EQUIPMENT_FIELDS,
        extensible: None,
    },
    ObjectTypeSchema {
        object_type: ObjectType::EquipmentList,
        fields: &EQUIPMENT_LIST_FIELDS,
        extensible: Some(ExtensibleGroup { width: 3, fields: &EQUIPMENT_LIST_GROUP }),
    },
];

/// Read-only catalog of object schemas, one per [`ObjectType`].
pub struct SchemaRegistry {
    schemas: &'static [ObjectTypeSchema; ObjectType::COUNT],
}

impl SchemaRegistry {
    /// Schema for `object_type`. Total over the closed enumeration.
    pub fn schema_for(&self, object_type: ObjectType) -> &'static ObjectTypeSchema {
        &self.schemas[object_type.declared_index()]
    }

    /// All schemas, in declaration order.
    pub fn schemas(&self) -> impl Iterator<Item = &'static ObjectTypeSchema> {
        self.schemas.iter()
    }
}

static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// The process-wide schema registry.
pub fn registry() -> &'static SchemaRegistry {
    REGISTRY.get_or_init(|| {
        for (i, schema) in SCHEMAS.iter().enumerate() {
            assert_eq!(
                schema.object_type.declared_index(),
                i,
                "schema table out of declaration order at {}",
                schema.object_type
            );
            for (j, field) in schema.fields.iter().enumerate() {
                assert_eq!(
                    field.index, j,
                    "non-contiguous field index in {} schema",
                    schema.object_type
                );
            }
            if let Some(group) = &schema.extensible {
                assert_eq!(
                    group.fields.len(),
                    group.width,
                    "extensible width mismatch in {} schema",
                    schema.object_type
                );
                for (j, field) in group.fields.iter().enumerate() {
                    assert_eq!(
                        field.index, j,
                        "non-contiguous group field index in {} schema",
                        schema.object_type
                    );
                }
            }
        }
        SchemaRegistry { schemas: &SCHEMAS }
    })
}

/// Schema for `object_type`, through the process-wide registry.
pub fn schema_for(object_type: ObjectType) -> &'static ObjectTypeSchema {
    registry().schema_for(object_type)
}

/// Scalar field definition of a schema by index.
pub fn field_definition(
    schema: &ObjectTypeSchema,
    index: usize,
) -> Option<&'static FieldDefinition> {
    schema.field(index)
}

/// Extensible group width of a schema, if it has a group.
pub fn extensible_group_width(schema: &ObjectTypeSchema) -> Option<usize> {
    schema.extensible_group_width()
}
