//! Record substrate behavior at the crate boundary.

use bem_record::{FlatRecord, RecordError, RecordStore, Value};
use bem_schema::ObjectType;
use bem_schema::fields::equipment_list;

#[test]
fn extensible_groups_preserve_push_order() {
    let mut record = FlatRecord::new(ObjectType::EquipmentList);
    record.set_name("EL").unwrap();

    let pushed = [
        (Value::Ref("A".into()), 1i64),
        (Value::Ref("B".into()), 2i64),
        (Value::Ref("C".into()), 3i64),
    ];
    for (i, (reference, seq)) in pushed.iter().enumerate() {
        let group = vec![reference.clone(), Value::Int(*seq), Value::Int(*seq)];
        let index = record.push_extensible_group(group).unwrap();
        assert_eq!(index, i);
    }

    assert_eq!(record.extensible_group_count(), 3);
    for (i, (reference, _)) in pushed.iter().enumerate() {
        assert_eq!(
            record.extensible_group_value(i, equipment_list::group::EQUIPMENT_NAME).unwrap(),
            reference
        );
    }

    record.clear_extensible_groups();
    assert_eq!(record.extensible_group_count(), 0);
}

#[test]
fn group_reads_fail_cleanly_out_of_range() {
    let mut record = FlatRecord::new(ObjectType::ZoneList);
    record.push_extensible_group(vec![Value::Ref("Z1".into())]).unwrap();

    assert!(matches!(
        record.extensible_group_value(1, 0).unwrap_err(),
        RecordError::GroupIndexOutOfRange { index: 1, count: 1 }
    ));
    assert!(matches!(
        record.extensible_group_value(0, 5).unwrap_err(),
        RecordError::FieldIndexOutOfRange { index: 5, count: 1 }
    ));
}

#[test]
fn counts_must_be_requeried_after_mutation() {
    let mut store = RecordStore::new();
    let h = store.create(ObjectType::ZoneList);
    store.get_mut(h).unwrap().push_extensible_group(vec![Value::Ref("Z1".into())]).unwrap();
    let stale = store.get(h).unwrap().extensible_group_count();

    store.get_mut(h).unwrap().clear_extensible_groups();
    assert_eq!(stale, 1);
    assert_eq!(store.get(h).unwrap().extensible_group_count(), 0);
}

#[test]
fn record_round_trips_through_json() {
    let mut record = FlatRecord::new(ObjectType::Zone);
    record.set_name("Z1").unwrap();
    record.set_value(1, 2i64).unwrap();
    record.set_value(3, 250.0).unwrap();

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: FlatRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn absent_survives_serialization_distinct_from_empty() {
    let mut record = FlatRecord::new(ObjectType::Building);
    record.set_value(2, Value::Str(String::new())).unwrap();

    let json = serde_json::to_string(&record).expect("serialize record");
    let round: FlatRecord = serde_json::from_str(&json).expect("deserialize record");
    assert!(round.value(1).unwrap().is_absent());
    assert!(!round.value(2).unwrap().is_absent());
}
