//! Ordering mutation behavior over an explicit list.
//!
//! The scenarios walk an explicit order through every mutation, checking the
//! size invariant (size changes only on successful insert/erase) and index
//! arithmetic at each step.

use bem_record::{OrderError, TypeOrder};
use bem_schema::ObjectType;

fn base_order() -> TypeOrder {
    TypeOrder::from_list(vec![
        ObjectType::Lights,    // 0
        ObjectType::Zone,      // 1
        ObjectType::RunPeriod, // 2
        ObjectType::Building,  // 3
    ])
}

#[test]
fn push_back_appends() {
    let mut order = base_order();
    assert!(order.push_back(ObjectType::ScheduleCompact));
    assert_eq!(order.index_in_order(ObjectType::ScheduleCompact), Some(4));
    assert_eq!(order.list().unwrap().len(), 5);
    // Unlisted types stay unlisted and sort after everything listed.
    assert_eq!(order.index_in_order(ObjectType::Material), None);
    assert!(order.less(ObjectType::ScheduleCompact, ObjectType::Material).unwrap());
    assert!(!order.less(ObjectType::Material, ObjectType::ScheduleCompact).unwrap());
}

#[test]
fn push_back_rejects_duplicates() {
    let mut order = base_order();
    assert!(!order.push_back(ObjectType::Zone));
    assert_eq!(order.list().unwrap().len(), 4);
}

#[test]
fn insert_before_lands_immediately_before_anchor() {
    let mut order = base_order();
    let building_before = order.index_in_order(ObjectType::Building).unwrap();
    assert!(order.insert_before(ObjectType::Construction, ObjectType::Building));
    assert_eq!(order.index_in_order(ObjectType::Construction), Some(building_before));
    assert_eq!(order.index_in_order(ObjectType::Building), Some(building_before + 1));
}

#[test]
fn insert_before_absent_anchor_appends() {
    let mut order = base_order();
    assert!(order.insert_before(ObjectType::Material, ObjectType::EquipmentList));
    assert_eq!(order.index_in_order(ObjectType::Material), Some(4));
}

#[test]
fn insert_at_clamps_overflow_to_append() {
    let mut order = base_order();
    assert!(order.insert_at(ObjectType::Material, 2));
    assert_eq!(order.index_in_order(ObjectType::Material), Some(2));
    assert!(order.insert_at(ObjectType::Construction, 37_891));
    assert_eq!(order.index_in_order(ObjectType::Construction), Some(5));
}

#[test]
fn move_to_front_shifts_everything_by_one() {
    let mut order = base_order();
    let before: Vec<ObjectType> = order.list().unwrap().to_vec();
    assert!(order.move_to(ObjectType::Building, 0));
    assert_eq!(order.index_in_order(ObjectType::Building), Some(0));
    for t in &before[..3] {
        let old = before.iter().position(|x| x == t).unwrap();
        assert_eq!(order.index_in_order(*t), Some(old + 1));
    }
    assert_eq!(order.list().unwrap().len(), 4);
}

#[test]
fn move_to_clamps_overflow_to_end() {
    let mut order = base_order();
    assert!(order.move_to(ObjectType::Zone, 18_601));
    assert_eq!(order.index_in_order(ObjectType::Zone), Some(3));
    assert_eq!(order.list().unwrap().len(), 4);
}

#[test]
fn move_before_relocates_and_preserves_relative_order() {
    let mut order = base_order();
    assert!(order.move_before(ObjectType::Building, ObjectType::Zone));
    assert_eq!(
        order.list().unwrap(),
        &[ObjectType::Lights, ObjectType::Building, ObjectType::Zone, ObjectType::RunPeriod]
    );
}

#[test]
fn move_before_fails_on_self_or_absent_operand() {
    let mut order = base_order();
    let snapshot: Vec<ObjectType> = order.list().unwrap().to_vec();
    assert!(!order.move_before(ObjectType::Zone, ObjectType::Zone));
    assert!(!order.move_before(ObjectType::Material, ObjectType::Zone));
    assert!(!order.move_before(ObjectType::Zone, ObjectType::Material));
    assert_eq!(order.list().unwrap(), snapshot.as_slice());
}

#[test]
fn swap_exchanges_exactly_two_positions() {
    let mut order = base_order();
    let i = order.index_in_order(ObjectType::Lights).unwrap();
    let j = order.index_in_order(ObjectType::RunPeriod).unwrap();
    assert!(order.swap(ObjectType::Lights, ObjectType::RunPeriod));
    assert_eq!(order.index_in_order(ObjectType::RunPeriod), Some(i));
    assert_eq!(order.index_in_order(ObjectType::Lights), Some(j));
    assert_eq!(order.index_in_order(ObjectType::Zone), Some(1));
    assert_eq!(order.index_in_order(ObjectType::Building), Some(3));
    assert!(!order.swap(ObjectType::Lights, ObjectType::Material));
}

#[test]
fn erase_decrements_later_indices() {
    let mut order = base_order();
    assert!(order.erase(ObjectType::Zone));
    assert_eq!(order.index_in_order(ObjectType::Zone), None);
    assert_eq!(order.index_in_order(ObjectType::Lights), Some(0));
    assert_eq!(order.index_in_order(ObjectType::RunPeriod), Some(1));
    assert_eq!(order.index_in_order(ObjectType::Building), Some(2));

    // Erasing an absent type fails and leaves the list unchanged.
    assert!(!order.erase(ObjectType::Zone));
    assert_eq!(order.list().unwrap().len(), 3);
}

#[test]
fn externally_managed_rejects_comparison() {
    let order = TypeOrder::externally_managed();
    assert_eq!(
        order.less(ObjectType::Zone, ObjectType::Building).unwrap_err(),
        OrderError::OrderNotOwned
    );
}
