//! Per-type field-mapping strategies and the unit conversion hook.
//!
//! The translators themselves are generic over the schema; behavior that
//! belongs to one object type — like a per-instance multiplier folded into
//! an emitted design quantity — lives here as a pair of adjustment
//! functions selected by exhaustive match on the object type. Forward
//! adjustments run on the outgoing record after its scalar cells are
//! populated; reverse adjustments run on the model object after its cells
//! are copied. The two are exact inverses, so a round trip reproduces the
//! model values.

use bem_graph::ModelObject;
use bem_record::{FlatRecord, Value};
use bem_schema::ObjectType;
use bem_schema::fields::{electric_equipment, lights};
use bem_units::{Quantity, Unit, UnitSystem, si};

use crate::error::Result;

type ForwardAdjust = fn(&ModelObject, &mut FlatRecord) -> Result<()>;
type ReverseAdjust = fn(&mut ModelObject) -> Result<()>;

/// Adjustment pair for one object type.
#[derive(Default)]
pub(crate) struct TypeStrategy {
    pub forward: Option<ForwardAdjust>,
    pub reverse: Option<ReverseAdjust>,
}

pub(crate) fn strategy_for(object_type: ObjectType) -> TypeStrategy {
    match object_type {
        ObjectType::Lights => TypeStrategy {
            forward: Some(lights_forward),
            reverse: Some(lights_reverse),
        },
        ObjectType::ElectricEquipment => TypeStrategy {
            forward: Some(electric_equipment_forward),
            reverse: Some(electric_equipment_reverse),
        },
        ObjectType::Building
        | ObjectType::Zone
        | ObjectType::ZoneList
        | ObjectType::RunPeriod
        | ObjectType::ScheduleCompact
        | ObjectType::Material
        | ObjectType::Construction
        | ObjectType::EquipmentList => TypeStrategy::default(),
    }
}

// Emitted design levels are absolute loads: per-instance level times the
// instance multiplier.
fn scale_emitted_level(
    object: &ModelObject,
    record: &mut FlatRecord,
    level_field: usize,
    multiplier_field: usize,
) -> Result<()> {
    let multiplier = object.real_or_default(multiplier_field).unwrap_or(1.0);
    if let Some(level) = record.value(level_field)?.as_real() {
        record.set_value(level_field, Value::Real(level * multiplier))?;
    }
    Ok(())
}

fn unscale_copied_level(
    object: &mut ModelObject,
    level_field: usize,
    multiplier_field: usize,
) -> Result<()> {
    let multiplier = object.real_or_default(multiplier_field).unwrap_or(1.0);
    if multiplier == 0.0 {
        return Ok(());
    }
    if let Some(level) = object.real(level_field) {
        object.set_value(level_field, Value::Real(level / multiplier))?;
    }
    Ok(())
}

fn lights_forward(object: &ModelObject, record: &mut FlatRecord) -> Result<()> {
    scale_emitted_level(object, record, lights::DESIGN_LEVEL, lights::MULTIPLIER)
}

fn lights_reverse(object: &mut ModelObject) -> Result<()> {
    unscale_copied_level(object, lights::DESIGN_LEVEL, lights::MULTIPLIER)
}

fn electric_equipment_forward(object: &ModelObject, record: &mut FlatRecord) -> Result<()> {
    scale_emitted_level(
        object,
        record,
        electric_equipment::DESIGN_LEVEL,
        electric_equipment::MULTIPLIER,
    )
}

fn electric_equipment_reverse(object: &mut ModelObject) -> Result<()> {
    unscale_copied_level(object, electric_equipment::DESIGN_LEVEL, electric_equipment::MULTIPLIER)
}

/// Unit for a schema field's unit hint.
///
/// Hints the catalog does not name fall back to a dimensionless SI unit, so
/// normalization is still well-defined for them.
pub(crate) fn unit_for_hint(hint: &str) -> Unit {
    match hint {
        "W" => si::watts(),
        "m" => si::meters(),
        "m^3" => si::cubic_meters(),
        "deg" => si::degrees(),
        "W/m-K" => si::watts_per_meter_kelvin(),
        "K" => si::kelvin(),
        _ => Unit::new(UnitSystem::Si),
    }
}

/// Normalize a unit-bearing value to scale 10^0, the convention every cell
/// of the flat format is written at.
pub(crate) fn normalize_to_base_scale(value: f64, hint: &str) -> f64 {
    Quantity::new(value, unit_for_hint(hint)).to_base_scale().value()
}
