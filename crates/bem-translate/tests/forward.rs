//! Forward translation behavior: reference emission, warnings, ordering,
//! idempotence.

use bem_graph::{GroupCell, Handle, ModelGraph};
use bem_record::Value;
use bem_schema::ObjectType;
use bem_schema::fields::{equipment_list, lights, zone_list};
use bem_translate::{FieldRef, ForwardTranslator, TranslationError, TranslationWarning};

fn zone(graph: &mut ModelGraph, name: &str) -> Handle {
    let handle = graph.add_object(ObjectType::Zone);
    graph.object_mut(handle).unwrap().set_name(name).unwrap();
    handle
}

#[test]
fn references_emit_the_target_name() {
    let mut graph = ModelGraph::new();
    let target = zone(&mut graph, "T1");
    let light = graph.add_object(ObjectType::Lights);
    {
        let object = graph.object_mut(light).unwrap();
        object.set_name("W1").unwrap();
        object.set_value(lights::MULTIPLIER, 2.0).unwrap();
        object.set_reference(lights::ZONE_NAME, target).unwrap();
    }

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, light).unwrap();

    assert_eq!(record.object_type(), ObjectType::Lights);
    assert_eq!(record.name(), Some("W1"));
    assert_eq!(record.value(lights::MULTIPLIER).unwrap(), &Value::Real(2.0));
    assert_eq!(record.value(lights::ZONE_NAME).unwrap(), &Value::Ref("T1".into()));
    assert!(translator.warnings().is_empty());
}

#[test]
fn deleted_target_leaves_field_unset_with_a_warning() {
    let mut graph = ModelGraph::new();
    let target = zone(&mut graph, "T1");
    let light = graph.add_object(ObjectType::Lights);
    {
        let object = graph.object_mut(light).unwrap();
        object.set_name("W1").unwrap();
        object.set_value(lights::MULTIPLIER, 2.0).unwrap();
        object.set_reference(lights::ZONE_NAME, target).unwrap();
    }
    graph.remove_object(target);

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, light).unwrap();

    // The other fields still populate; only the reference is omitted.
    assert_eq!(record.name(), Some("W1"));
    assert_eq!(record.value(lights::MULTIPLIER).unwrap(), &Value::Real(2.0));
    assert!(record.value(lights::ZONE_NAME).unwrap().is_absent());
    assert_eq!(
        translator.warnings(),
        &[TranslationWarning::DanglingReference {
            object_type: ObjectType::Lights,
            object_name: "W1".into(),
            field: FieldRef::Scalar(lights::ZONE_NAME),
        }]
    );
}

#[test]
fn renamed_targets_emit_their_current_name() {
    let mut graph = ModelGraph::new();
    let target = zone(&mut graph, "Old");
    let light = graph.add_object(ObjectType::Lights);
    graph.object_mut(light).unwrap().set_name("L").unwrap();
    graph.object_mut(light).unwrap().set_reference(lights::ZONE_NAME, target).unwrap();

    graph.object_mut(target).unwrap().set_name("New").unwrap();

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, light).unwrap();
    assert_eq!(record.value(lights::ZONE_NAME).unwrap(), &Value::Ref("New".into()));
}

#[test]
fn design_level_is_scaled_by_the_instance_multiplier() {
    let mut graph = ModelGraph::new();
    let z = zone(&mut graph, "Z");
    let light = graph.add_object(ObjectType::Lights);
    {
        let object = graph.object_mut(light).unwrap();
        object.set_name("L").unwrap();
        object.set_reference(lights::ZONE_NAME, z).unwrap();
        object.set_value(lights::DESIGN_LEVEL, 50.0).unwrap();
        object.set_value(lights::MULTIPLIER, 3.0).unwrap();
    }

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, light).unwrap();
    assert_eq!(record.value(lights::DESIGN_LEVEL).unwrap(), &Value::Real(150.0));
    // The multiplier itself is still emitted verbatim.
    assert_eq!(record.value(lights::MULTIPLIER).unwrap(), &Value::Real(3.0));
}

#[test]
fn default_multiplier_leaves_design_level_unscaled() {
    let mut graph = ModelGraph::new();
    let z = zone(&mut graph, "Z");
    let light = graph.add_object(ObjectType::Lights);
    {
        let object = graph.object_mut(light).unwrap();
        object.set_name("L").unwrap();
        object.set_reference(lights::ZONE_NAME, z).unwrap();
        object.set_value(lights::DESIGN_LEVEL, 50.0).unwrap();
    }

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, light).unwrap();
    assert_eq!(record.value(lights::DESIGN_LEVEL).unwrap(), &Value::Real(50.0));
    assert!(record.value(lights::MULTIPLIER).unwrap().is_absent());
}

#[test]
fn group_pushes_follow_model_sequence_order() {
    let mut graph = ModelGraph::new();
    let z1 = zone(&mut graph, "Z1");
    let z2 = zone(&mut graph, "Z2");
    let z3 = zone(&mut graph, "Z3");
    let list = graph.add_object(ObjectType::ZoneList);
    {
        let object = graph.object_mut(list).unwrap();
        object.set_name("All").unwrap();
        for z in [z2, z3, z1] {
            object.push_group(vec![GroupCell::Reference(z)]).unwrap();
        }
    }

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, list).unwrap();
    let names: Vec<&Value> = (0..record.extensible_group_count())
        .map(|g| record.extensible_group_value(g, zone_list::group::ZONE_NAME).unwrap())
        .collect();
    assert_eq!(
        names,
        vec![&Value::Ref("Z2".into()), &Value::Ref("Z3".into()), &Value::Ref("Z1".into())]
    );
}

#[test]
fn dangling_group_reference_leaves_cell_absent() {
    let mut graph = ModelGraph::new();
    let equipment = graph.add_object(ObjectType::ElectricEquipment);
    graph.object_mut(equipment).unwrap().set_name("Fan").unwrap();
    let list = graph.add_object(ObjectType::EquipmentList);
    {
        let object = graph.object_mut(list).unwrap();
        object.set_name("EL").unwrap();
        object
            .push_group(vec![
                GroupCell::Reference(equipment),
                GroupCell::Value(Value::Int(1)),
                GroupCell::Value(Value::Int(1)),
            ])
            .unwrap();
    }
    graph.remove_object(equipment);

    let mut translator = ForwardTranslator::new();
    let record = translator.translate_object(&graph, list).unwrap();
    assert!(
        record
            .extensible_group_value(0, equipment_list::group::EQUIPMENT_NAME)
            .unwrap()
            .is_absent()
    );
    assert_eq!(
        record.extensible_group_value(0, equipment_list::group::COOLING_SEQUENCE).unwrap(),
        &Value::Int(1)
    );
    assert_eq!(translator.warnings().len(), 1);
}

#[test]
fn translation_is_idempotent_for_a_fixed_graph() {
    let mut graph = ModelGraph::new();
    let z = zone(&mut graph, "Z");
    let light = graph.add_object(ObjectType::Lights);
    {
        let object = graph.object_mut(light).unwrap();
        object.set_name("L").unwrap();
        object.set_reference(lights::ZONE_NAME, z).unwrap();
        object.set_value(lights::DESIGN_LEVEL, 80.0).unwrap();
        object.set_value(lights::MULTIPLIER, 2.0).unwrap();
    }

    let mut translator = ForwardTranslator::new();
    let first = translator.translate_object(&graph, light).unwrap();
    let second = translator.translate_object(&graph, light).unwrap();
    assert_eq!(first, second);
}

#[test]
fn batch_order_is_iteration_order() {
    let mut graph = ModelGraph::new();
    zone(&mut graph, "B");
    zone(&mut graph, "A");
    let building = graph.add_object(ObjectType::Building);
    graph.object_mut(building).unwrap().set_name("HQ").unwrap();

    let mut translator = ForwardTranslator::new();
    let records = translator.translate_graph(&graph).unwrap();
    let names: Vec<Option<&str>> = records.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec![Some("B"), Some("A"), Some("HQ")]);
}

#[test]
fn dead_handles_are_a_contract_error() {
    let mut graph = ModelGraph::new();
    let z = zone(&mut graph, "Z");
    graph.remove_object(z);

    let mut translator = ForwardTranslator::new();
    let err = translator.translate_object(&graph, z).unwrap_err();
    assert!(matches!(err, TranslationError::DeadHandle { .. }));
}
