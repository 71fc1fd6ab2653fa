use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `class_timetable` row as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimetableSlot {
    pub id: i64,
    pub class_id: i64,
    /// Persisted day name, Monday..Friday.
    pub day_of_week: String,
    pub period: i32,
    /// Wall-clock "HH:MM"; fixed width keeps string order equal to clock order.
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_user_id: Option<i64>,
}

/// A timetable row joined with the human-readable subject and teacher
/// columns used for presentation. The joined names are not part of the
/// slot's identity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSlotRow {
    pub id: i64,
    pub class_id: i64,
    pub day_of_week: String,
    pub period: i32,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub subject_name: String,
    pub teacher_user_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub teacher_email: Option<String>,
}

/// A candidate slot from a teacher's schedule, joined with its class name,
/// as returned by the conflict scan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbConflictSlot {
    pub id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

/// A teacher-assigned slot of one class, the starting point of the
/// diagnostic conflict report.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAssignedSlot {
    pub id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher_user_id: i64,
    pub teacher_name: String,
}

/// The fields of a slot that the lifecycle may write. `class_id` is fixed
/// at creation and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFields {
    pub day_of_week: String,
    pub period: i32,
    pub start_time: String,
    pub end_time: String,
    pub subject_id: i64,
    pub teacher_user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSubject {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// A user row joined with its role name, used by credential checks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub status: String,
}
