use classtime_core::errors::SchoolError;
use classtime_core::models::timetable::{
    ConflictPair, ConflictingSlot, SlotCreateRequest, SlotUpdateRequest, SlotView, SubjectRef,
    TeacherBrief, TeacherRef,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_string, to_value};

fn create_request() -> SlotCreateRequest {
    SlotCreateRequest {
        class_id: 1,
        day_of_week: 1,
        period_no: 1,
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        subject_id: 5,
        teacher_user_id: Some(7),
    }
}

#[test]
fn test_slot_create_request_serialization() {
    let request = create_request();

    let serialized = to_string(&request).expect("Failed to serialize create request");
    let deserialized: SlotCreateRequest =
        from_str(&serialized).expect("Failed to deserialize create request");

    assert_eq!(deserialized.class_id, request.class_id);
    assert_eq!(deserialized.day_of_week, request.day_of_week);
    assert_eq!(deserialized.period_no, request.period_no);
    assert_eq!(deserialized.start_time, request.start_time);
    assert_eq!(deserialized.end_time, request.end_time);
    assert_eq!(deserialized.subject_id, request.subject_id);
    assert_eq!(deserialized.teacher_user_id, request.teacher_user_id);
}

#[test]
fn test_valid_create_request_passes() {
    assert!(create_request().validate().is_ok());
}

#[test]
fn test_unassigned_teacher_is_allowed() {
    let mut request = create_request();
    request.teacher_user_id = None;
    assert!(request.validate().is_ok());
}

#[rstest]
#[case(|r: &mut SlotCreateRequest| r.class_id = 0)]
#[case(|r: &mut SlotCreateRequest| r.day_of_week = 0)]
#[case(|r: &mut SlotCreateRequest| r.day_of_week = 6)]
#[case(|r: &mut SlotCreateRequest| r.period_no = 0)]
#[case(|r: &mut SlotCreateRequest| r.start_time = "25:00".to_string())]
#[case(|r: &mut SlotCreateRequest| r.end_time = "9:00".to_string())]
#[case(|r: &mut SlotCreateRequest| r.subject_id = -1)]
#[case(|r: &mut SlotCreateRequest| r.teacher_user_id = Some(0))]
fn test_malformed_create_request_rejected(#[case] mutate: fn(&mut SlotCreateRequest)) {
    let mut request = create_request();
    mutate(&mut request);

    match request.validate() {
        Err(SchoolError::Validation(_)) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_inverted_interval_is_permitted() {
    // end before start is not rejected by shape validation
    let mut request = create_request();
    request.start_time = "10:00".to_string();
    request.end_time = "09:00".to_string();
    assert!(request.validate().is_ok());
}

#[test]
fn test_update_request_validation() {
    let request = SlotUpdateRequest {
        day_of_week: 5,
        period_no: 8,
        start_time: "13:30".to_string(),
        end_time: "14:15".to_string(),
        subject_id: 2,
        teacher_user_id: None,
    };
    assert!(request.validate().is_ok());

    let mut bad = request.clone();
    bad.start_time = "13:3".to_string();
    assert!(matches!(bad.validate(), Err(SchoolError::Validation(_))));
}

#[test]
fn test_slot_view_serializes_nested_refs() {
    let view = SlotView {
        id: 11,
        day_of_week: 1,
        day: "Monday".to_string(),
        period_no: 2,
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        subject: SubjectRef {
            id: 5,
            name: "Physics".to_string(),
        },
        teacher: Some(TeacherRef {
            id: 7,
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.edu".to_string(),
        }),
    };

    let value = to_value(&view).expect("Failed to serialize slot view");
    assert_eq!(value["subject"]["name"], json!("Physics"));
    assert_eq!(value["teacher"]["email"], json!("ada@example.edu"));

    let unassigned = SlotView {
        teacher: None,
        ..view
    };
    let value = to_value(&unassigned).expect("Failed to serialize slot view");
    assert_eq!(value["teacher"], serde_json::Value::Null);
}

#[test]
fn test_conflict_pair_serialization() {
    let pair = ConflictPair {
        teacher: TeacherBrief {
            id: 7,
            full_name: "Ada Lovelace".to_string(),
        },
        slot: ConflictingSlot {
            id: 1,
            class_id: 1,
            class_name: "Year 9A".to_string(),
            day_of_week: 1,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
        },
        conflict_with: ConflictingSlot {
            id: 2,
            class_id: 2,
            class_name: "Year 9B".to_string(),
            day_of_week: 1,
            start_time: "09:30".to_string(),
            end_time: "10:30".to_string(),
        },
    };

    let serialized = to_string(&pair).expect("Failed to serialize conflict pair");
    let deserialized: ConflictPair =
        from_str(&serialized).expect("Failed to deserialize conflict pair");

    assert_eq!(deserialized, pair);
}
