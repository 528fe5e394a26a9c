use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Closed enumeration of every object type the engine knows how to schema.
///
/// The declaration order below is the registry order: it is the order
/// `TypeOrder::by_declared_order` sorts by and the order `all()` iterates in.
/// New variants must be appended together with a schema entry in
/// [`crate::registry`] and a field-constant module in [`crate::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    Building,
    Zone,
    ZoneList,
    RunPeriod,
    ScheduleCompact,
    Material,
    Construction,
    Lights,
    ElectricEquipment,
    EquipmentList,
}

const ALL: [ObjectType; 10] = [
    ObjectType::Building,
    ObjectType::Zone,
    ObjectType::ZoneList,
    ObjectType::RunPeriod,
    ObjectType::ScheduleCompact,
    ObjectType::Material,
    ObjectType::Construction,
    ObjectType::Lights,
    ObjectType::ElectricEquipment,
    ObjectType::EquipmentList,
];

impl ObjectType {
    /// Number of object types in the catalog.
    pub const COUNT: usize = ALL.len();

    /// Every object type, in declaration order.
    pub fn all() -> &'static [ObjectType] {
        &ALL
    }

    /// Position of this type in the declaration order.
    pub fn declared_index(self) -> usize {
        self as usize
    }

    /// Canonical name at the external text boundary. Case-sensitive.
    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Building => "Building",
            ObjectType::Zone => "Zone",
            ObjectType::ZoneList => "ZoneList",
            ObjectType::RunPeriod => "RunPeriod",
            ObjectType::ScheduleCompact => "Schedule:Compact",
            ObjectType::Material => "Material",
            ObjectType::Construction => "Construction",
            ObjectType::Lights => "Lights",
            ObjectType::ElectricEquipment => "ElectricEquipment",
            ObjectType::EquipmentList => "ZoneHVAC:EquipmentList",
        }
    }

    /// Look up a type by its canonical external name.
    ///
    /// The match is exact: the external format is case-sensitive, so
    /// `"schedule:compact"` is not a schema name.
    pub fn from_name(name: &str) -> Option<ObjectType> {
        ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ObjectType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::from_name(s).ok_or_else(|| SchemaError::unknown_schema(s))
    }
}
