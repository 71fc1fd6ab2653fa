use classtime_core::models::timetable::{SlotView, SubjectRef};
use classtime_core::timetable::week::group_week;
use pretty_assertions::assert_eq;

fn slot(id: i64, day: &str, day_of_week: u8, start: &str, end: &str, period_no: i32) -> SlotView {
    SlotView {
        id,
        day_of_week,
        day: day.to_string(),
        period_no,
        start_time: start.to_string(),
        end_time: end.to_string(),
        subject: SubjectRef {
            id: 1,
            name: "Mathematics".to_string(),
        },
        teacher: None,
    }
}

#[test]
fn test_five_buckets_in_fixed_order() {
    let grouped = group_week(vec![]);

    assert_eq!(grouped.len(), 5);
    let days: Vec<&str> = grouped.iter().map(|bucket| bucket.day.as_str()).collect();
    assert_eq!(days, vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]);
    let numbers: Vec<u8> = grouped.iter().map(|bucket| bucket.day_of_week).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert!(grouped.iter().all(|bucket| bucket.slots.is_empty()));
}

#[test]
fn test_grouping_ignores_insertion_order() {
    let grouped = group_week(vec![
        slot(3, "Friday", 5, "08:00", "09:00", 1),
        slot(1, "Monday", 1, "10:00", "11:00", 3),
        slot(2, "Wednesday", 3, "09:00", "10:00", 2),
        slot(4, "Monday", 1, "08:00", "09:00", 1),
    ]);

    assert_eq!(grouped.len(), 5);
    let monday_ids: Vec<i64> = grouped[0].slots.iter().map(|s| s.id).collect();
    assert_eq!(monday_ids, vec![4, 1]);
    assert!(grouped[1].slots.is_empty());
    assert_eq!(grouped[2].slots[0].id, 2);
    assert!(grouped[3].slots.is_empty());
    assert_eq!(grouped[4].slots[0].id, 3);
}

#[test]
fn test_day_sorted_by_start_time_then_period() {
    let grouped = group_week(vec![
        slot(1, "Tuesday", 2, "09:00", "10:00", 4),
        slot(2, "Tuesday", 2, "08:00", "09:00", 9),
        slot(3, "Tuesday", 2, "09:00", "10:00", 2),
    ]);

    let tuesday_ids: Vec<i64> = grouped[1].slots.iter().map(|s| s.id).collect();
    assert_eq!(tuesday_ids, vec![2, 3, 1]);
}

#[test]
fn test_unknown_day_values_are_dropped() {
    let grouped = group_week(vec![
        slot(1, "Monday", 1, "08:00", "09:00", 1),
        slot(2, "Saturday", 0, "08:00", "09:00", 1),
        slot(3, "", 0, "08:00", "09:00", 1),
    ]);

    assert_eq!(grouped.len(), 5);
    let total: usize = grouped.iter().map(|bucket| bucket.slots.len()).sum();
    assert_eq!(total, 1);
    assert_eq!(grouped[0].slots[0].id, 1);
}
