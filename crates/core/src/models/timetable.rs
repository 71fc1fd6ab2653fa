use serde::{Deserialize, Serialize};

use crate::errors::{SchoolError, SchoolResult};
use crate::models::weekday::Weekday;
use crate::timetable::interval;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCreateRequest {
    pub class_id: i64,
    /// UI ordinal, 1..=5.
    pub day_of_week: i32,
    pub period_no: i32,
    /// Wall-clock "HH:MM".
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotUpdateRequest {
    pub day_of_week: i32,
    pub period_no: i32,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_user_id: Option<i64>,
}

impl SlotCreateRequest {
    /// Shape validation, run before any persistence access. Referential
    /// checks (class, subject, teacher) are the lifecycle's job.
    pub fn validate(&self) -> SchoolResult<()> {
        if self.class_id <= 0 {
            return Err(SchoolError::Validation("class_id must be positive".to_string()));
        }
        validate_slot_fields(
            self.day_of_week,
            self.period_no,
            &self.start_time,
            &self.end_time,
            self.subject_id,
            self.teacher_user_id,
        )
    }
}

impl SlotUpdateRequest {
    pub fn validate(&self) -> SchoolResult<()> {
        validate_slot_fields(
            self.day_of_week,
            self.period_no,
            &self.start_time,
            &self.end_time,
            self.subject_id,
            self.teacher_user_id,
        )
    }
}

fn validate_slot_fields(
    day_of_week: i32,
    period_no: i32,
    start_time: &str,
    end_time: &str,
    subject_id: i64,
    teacher_user_id: Option<i64>,
) -> SchoolResult<()> {
    if Weekday::from_number(day_of_week).is_none() {
        return Err(SchoolError::Validation("day_of_week must be 1..5".to_string()));
    }
    if period_no < 1 {
        return Err(SchoolError::Validation("period_no must be >= 1".to_string()));
    }
    if interval::parse_hhmm(start_time).is_none() {
        return Err(SchoolError::Validation("start_time must be HH:MM".to_string()));
    }
    if interval::parse_hhmm(end_time).is_none() {
        return Err(SchoolError::Validation("end_time must be HH:MM".to_string()));
    }
    if subject_id <= 0 {
        return Err(SchoolError::Validation("subject_id must be positive".to_string()));
    }
    if let Some(teacher_user_id) = teacher_user_id {
        if teacher_user_id <= 0 {
            return Err(SchoolError::Validation(
                "teacher_user_id must be positive".to_string(),
            ));
        }
    }
    // end_time is deliberately not required to come after start_time; the
    // overlap predicate treats inverted ranges as empty.
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherRef {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// One timetable slot as presented to the admin UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    pub id: i64,
    /// UI ordinal for the day; 0 when the persisted name is unknown.
    pub day_of_week: u8,
    /// Persisted day name.
    pub day: String,
    pub period_no: i32,
    pub start_time: String,
    pub end_time: String,
    pub subject: SubjectRef,
    pub teacher: Option<TeacherRef>,
}

/// One bucket of the weekly view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub day_of_week: u8,
    pub slots: Vec<SlotView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableResponse {
    pub class_id: i64,
    pub timetable: Vec<DaySchedule>,
}

/// A slot as it appears inside a conflict record: enough to locate the
/// lesson and the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingSlot {
    pub id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherBrief {
    pub id: i64,
    pub full_name: String,
}

/// One double-booking hit in the diagnostic report: a slot of the class
/// under inspection paired with the colliding slot from the teacher's
/// schedule. The same physical collision is reported from both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    pub teacher: TeacherBrief,
    pub slot: ConflictingSlot,
    pub conflict_with: ConflictingSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReportResponse {
    pub class_id: i64,
    pub conflicts: Vec<ConflictPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCreatedResponse {
    pub ok: bool,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub ok: bool,
}
