//! # Timetable Handlers
//!
//! Handlers for the weekly class timetable: the grouped weekly view, the
//! teacher double-booking report, and the slot lifecycle (create, update,
//! delete).
//!
//! The lifecycle handlers are the transactional orchestrators of the
//! system. Shape validation runs before any database access; referential
//! checks and the conflict scan run inside the same transaction as the
//! write, so every failure path rolls back without observable side effects.
//! A slot's state machine is plain: it either exists or it does not, and an
//! update keeps its identity and owning class.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use classtime_core::{
    errors::SchoolError,
    models::{
        timetable::{
            AckResponse, ConflictPair, ConflictReportResponse, ConflictingSlot,
            SlotCreateRequest, SlotCreatedResponse, SlotUpdateRequest, SlotView, SubjectRef,
            TeacherBrief, TeacherRef, TimetableResponse,
        },
        weekday::Weekday,
    },
    timetable::week::group_week,
};
use classtime_db::{
    models::{DbConflictSlot, DbSlotRow, SlotFields},
    repositories::{school, timetable},
};

use crate::{middleware::error_handling::AppError, ApiState};

/// UI ordinal for a persisted day name; 0 when the name is unknown.
fn day_number(name: &str) -> u8 {
    Weekday::from_name(name).map(|day| day.number()).unwrap_or(0)
}

/// Maps a joined timetable row into its presentation shape. The teacher is
/// present only when all joined columns are, so a dangling reference never
/// produces a half-filled record.
fn slot_view(row: DbSlotRow) -> SlotView {
    let teacher = match (row.teacher_user_id, row.teacher_name, row.teacher_email) {
        (Some(id), Some(full_name), Some(email)) => Some(TeacherRef {
            id,
            full_name,
            email,
        }),
        _ => None,
    };

    SlotView {
        id: row.id,
        day_of_week: day_number(&row.day_of_week),
        day: row.day_of_week,
        period_no: row.period,
        start_time: row.start_time,
        end_time: row.end_time,
        subject: SubjectRef {
            id: row.subject_id,
            name: row.subject_name,
        },
        teacher,
    }
}

fn conflicting_slot(slot: DbConflictSlot) -> ConflictingSlot {
    ConflictingSlot {
        id: slot.id,
        class_id: slot.class_id,
        class_name: slot.class_name,
        day_of_week: day_number(&slot.day_of_week),
        start_time: slot.start_time,
        end_time: slot.end_time,
    }
}

#[axum::debug_handler]
pub async fn get_timetable(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<i64>,
) -> Result<Json<TimetableResponse>, AppError> {
    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    if !school::class_exists(&mut conn, class_id)
        .await
        .map_err(SchoolError::Database)?
    {
        return Err(AppError(SchoolError::NotFound("Class not found".to_string())));
    }

    let rows = timetable::list_class_slots(&mut conn, class_id)
        .await
        .map_err(SchoolError::Database)?;

    let slots = rows.into_iter().map(slot_view).collect();

    Ok(Json(TimetableResponse {
        class_id,
        timetable: group_week(slots),
    }))
}

/// Teacher double-booking report for one class.
///
/// For every teacher-assigned slot of the class, scans that teacher's full
/// schedule (excluding the slot itself) and emits one pair per overlapping
/// hit. Read-only; a collision between two reported classes shows up once
/// from each side.
#[axum::debug_handler]
pub async fn get_conflicts(
    State(state): State<Arc<ApiState>>,
    Path(class_id): Path<i64>,
) -> Result<Json<ConflictReportResponse>, AppError> {
    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    if !school::class_exists(&mut conn, class_id)
        .await
        .map_err(SchoolError::Database)?
    {
        return Err(AppError(SchoolError::NotFound("Class not found".to_string())));
    }

    let assigned = timetable::list_assigned_slots(&mut conn, class_id)
        .await
        .map_err(SchoolError::Database)?;

    let mut conflicts = Vec::new();
    for slot in assigned {
        let hits = timetable::find_teacher_conflicts(
            &mut conn,
            slot.teacher_user_id,
            &slot.day_of_week,
            &slot.start_time,
            &slot.end_time,
            Some(slot.id),
        )
        .await
        .map_err(SchoolError::Database)?;

        for hit in hits {
            conflicts.push(ConflictPair {
                teacher: TeacherBrief {
                    id: slot.teacher_user_id,
                    full_name: slot.teacher_name.clone(),
                },
                slot: ConflictingSlot {
                    id: slot.id,
                    class_id: slot.class_id,
                    class_name: slot.class_name.clone(),
                    day_of_week: day_number(&slot.day_of_week),
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                },
                conflict_with: conflicting_slot(hit),
            });
        }
    }

    Ok(Json(ConflictReportResponse { class_id, conflicts }))
}

#[axum::debug_handler]
pub async fn create_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SlotCreateRequest>,
) -> Result<Json<SlotCreatedResponse>, AppError> {
    // Shape validation happens before a transaction is opened
    payload.validate()?;
    let day = Weekday::from_number(payload.day_of_week)
        .ok_or_else(|| SchoolError::Validation("day_of_week must be 1..5".to_string()))?;

    let mut tx = state
        .db_pool
        .begin()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    if !school::class_exists(&mut tx, payload.class_id)
        .await
        .map_err(SchoolError::Database)?
    {
        return Err(AppError(SchoolError::NotFound("Class not found".to_string())));
    }
    if !school::subject_exists(&mut tx, payload.subject_id)
        .await
        .map_err(SchoolError::Database)?
    {
        return Err(AppError(SchoolError::NotFound("Subject not found".to_string())));
    }

    if let Some(teacher_user_id) = payload.teacher_user_id {
        if !school::teacher_exists(&mut tx, teacher_user_id)
            .await
            .map_err(SchoolError::Database)?
        {
            return Err(AppError(SchoolError::NotFound("Teacher not found".to_string())));
        }

        let conflicts = timetable::find_teacher_conflicts(
            &mut tx,
            teacher_user_id,
            day.name(),
            &payload.start_time,
            &payload.end_time,
            None,
        )
        .await
        .map_err(SchoolError::Database)?;

        if !conflicts.is_empty() {
            return Err(AppError(SchoolError::Conflict {
                message: "Teacher scheduling conflict".to_string(),
                conflicts: conflicts.into_iter().map(conflicting_slot).collect(),
            }));
        }
    }

    let fields = SlotFields {
        day_of_week: day.name().to_string(),
        period: payload.period_no,
        start_time: payload.start_time.clone(),
        end_time: payload.end_time.clone(),
        subject_id: payload.subject_id,
        teacher_user_id: payload.teacher_user_id,
    };

    let id = timetable::insert_slot(&mut tx, payload.class_id, &fields)
        .await
        .map_err(SchoolError::Database)?;

    tx.commit()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    Ok(Json(SlotCreatedResponse { ok: true, id }))
}

#[axum::debug_handler]
pub async fn update_slot(
    State(state): State<Arc<ApiState>>,
    Path(slot_id): Path<i64>,
    Json(payload): Json<SlotUpdateRequest>,
) -> Result<Json<AckResponse>, AppError> {
    payload.validate()?;
    let day = Weekday::from_number(payload.day_of_week)
        .ok_or_else(|| SchoolError::Validation("day_of_week must be 1..5".to_string()))?;

    let mut tx = state
        .db_pool
        .begin()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let existing = timetable::get_slot(&mut tx, slot_id)
        .await
        .map_err(SchoolError::Database)?;
    if existing.is_none() {
        return Err(AppError(SchoolError::NotFound("Slot not found".to_string())));
    }

    if !school::subject_exists(&mut tx, payload.subject_id)
        .await
        .map_err(SchoolError::Database)?
    {
        return Err(AppError(SchoolError::NotFound("Subject not found".to_string())));
    }

    if let Some(teacher_user_id) = payload.teacher_user_id {
        if !school::teacher_exists(&mut tx, teacher_user_id)
            .await
            .map_err(SchoolError::Database)?
        {
            return Err(AppError(SchoolError::NotFound("Teacher not found".to_string())));
        }

        // The slot being updated must never conflict with itself
        let conflicts = timetable::find_teacher_conflicts(
            &mut tx,
            teacher_user_id,
            day.name(),
            &payload.start_time,
            &payload.end_time,
            Some(slot_id),
        )
        .await
        .map_err(SchoolError::Database)?;

        if !conflicts.is_empty() {
            return Err(AppError(SchoolError::Conflict {
                message: "Teacher scheduling conflict".to_string(),
                conflicts: conflicts.into_iter().map(conflicting_slot).collect(),
            }));
        }
    }

    let fields = SlotFields {
        day_of_week: day.name().to_string(),
        period: payload.period_no,
        start_time: payload.start_time.clone(),
        end_time: payload.end_time.clone(),
        subject_id: payload.subject_id,
        teacher_user_id: payload.teacher_user_id,
    };

    timetable::update_slot(&mut tx, slot_id, &fields)
        .await
        .map_err(SchoolError::Database)?;

    tx.commit()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    Ok(Json(AckResponse { ok: true }))
}

#[axum::debug_handler]
pub async fn delete_slot(
    State(state): State<Arc<ApiState>>,
    Path(slot_id): Path<i64>,
) -> Result<Json<AckResponse>, AppError> {
    let mut tx = state
        .db_pool
        .begin()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let existing = timetable::get_slot(&mut tx, slot_id)
        .await
        .map_err(SchoolError::Database)?;
    if existing.is_none() {
        return Err(AppError(SchoolError::NotFound("Slot not found".to_string())));
    }

    timetable::delete_slot(&mut tx, slot_id)
        .await
        .map_err(SchoolError::Database)?;

    tx.commit()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    Ok(Json(AckResponse { ok: true }))
}
