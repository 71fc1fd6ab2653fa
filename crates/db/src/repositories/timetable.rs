use classtime_core::timetable::interval;
use eyre::Result;
use sqlx::PgConnection;

use crate::models::{DbAssignedSlot, DbConflictSlot, DbSlotRow, DbTimetableSlot, SlotFields};

pub async fn get_slot(conn: &mut PgConnection, slot_id: i64) -> Result<Option<DbTimetableSlot>> {
    let slot = sqlx::query_as::<_, DbTimetableSlot>(
        r#"
        SELECT id, class_id, day_of_week, period, start_time, end_time,
               subject_id, teacher_user_id
        FROM class_timetable
        WHERE id = $1
        "#,
    )
    .bind(slot_id)
    .fetch_optional(conn)
    .await?;

    Ok(slot)
}

/// All slots of a class, joined with subject and teacher names, ordered by
/// day (Monday first), start time, then period.
pub async fn list_class_slots(conn: &mut PgConnection, class_id: i64) -> Result<Vec<DbSlotRow>> {
    tracing::debug!("Listing timetable slots for class: {}", class_id);

    let rows = sqlx::query_as::<_, DbSlotRow>(
        r#"
        SELECT
            tt.id,
            tt.class_id,
            tt.day_of_week,
            tt.period,
            tt.start_time,
            tt.end_time,
            tt.subject_id,
            s.name AS subject_name,
            tt.teacher_user_id,
            u.full_name AS teacher_name,
            u.email AS teacher_email
        FROM class_timetable tt
        JOIN subjects s ON s.id = tt.subject_id
        LEFT JOIN users u ON u.id = tt.teacher_user_id
        WHERE tt.class_id = $1
        ORDER BY
            CASE tt.day_of_week
                WHEN 'Monday' THEN 1
                WHEN 'Tuesday' THEN 2
                WHEN 'Wednesday' THEN 3
                WHEN 'Thursday' THEN 4
                WHEN 'Friday' THEN 5
                ELSE 6
            END,
            tt.start_time,
            tt.period
        "#,
    )
    .bind(class_id)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}

pub async fn insert_slot(
    conn: &mut PgConnection,
    class_id: i64,
    fields: &SlotFields,
) -> Result<i64> {
    tracing::debug!(
        "Inserting timetable slot: class_id={}, day={}, period={}",
        class_id,
        fields.day_of_week,
        fields.period
    );

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO class_timetable
            (class_id, day_of_week, period, start_time, end_time, subject_id, teacher_user_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(class_id)
    .bind(&fields.day_of_week)
    .bind(fields.period)
    .bind(&fields.start_time)
    .bind(&fields.end_time)
    .bind(fields.subject_id)
    .bind(fields.teacher_user_id)
    .fetch_one(conn)
    .await?;

    Ok(id)
}

/// Replaces every mutable field of a slot. The owning class never changes.
pub async fn update_slot(
    conn: &mut PgConnection,
    slot_id: i64,
    fields: &SlotFields,
) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE class_timetable
        SET day_of_week = $2,
            period = $3,
            start_time = $4,
            end_time = $5,
            subject_id = $6,
            teacher_user_id = $7
        WHERE id = $1
        "#,
    )
    .bind(slot_id)
    .bind(&fields.day_of_week)
    .bind(fields.period)
    .bind(&fields.start_time)
    .bind(&fields.end_time)
    .bind(fields.subject_id)
    .bind(fields.teacher_user_id)
    .execute(conn)
    .await?;

    Ok(())
}

pub async fn delete_slot(conn: &mut PgConnection, slot_id: i64) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM class_timetable
        WHERE id = $1
        "#,
    )
    .bind(slot_id)
    .execute(conn)
    .await?;

    Ok(())
}

/// Slots that would double-book a teacher: scans the teacher's schedule on
/// the given day across all classes and keeps the entries whose half-open
/// interval overlaps `[start_time, end_time)`. `exclude_slot_id` skips the
/// slot being updated so it never conflicts with itself.
pub async fn find_teacher_conflicts(
    conn: &mut PgConnection,
    teacher_user_id: i64,
    day_of_week: &str,
    start_time: &str,
    end_time: &str,
    exclude_slot_id: Option<i64>,
) -> Result<Vec<DbConflictSlot>> {
    tracing::debug!(
        "Scanning for teacher conflicts: teacher={}, day={}, interval={}-{}",
        teacher_user_id,
        day_of_week,
        start_time,
        end_time
    );

    let candidates = sqlx::query_as::<_, DbConflictSlot>(
        r#"
        SELECT
            tt.id,
            tt.class_id,
            c.name AS class_name,
            tt.day_of_week,
            tt.start_time,
            tt.end_time
        FROM class_timetable tt
        JOIN classes c ON c.id = tt.class_id
        WHERE tt.teacher_user_id = $1
          AND tt.day_of_week = $2
          AND ($3::BIGINT IS NULL OR tt.id <> $3)
        "#,
    )
    .bind(teacher_user_id)
    .bind(day_of_week)
    .bind(exclude_slot_id)
    .fetch_all(conn)
    .await?;

    let conflicts = candidates
        .into_iter()
        .filter(|slot| interval::overlaps(start_time, end_time, &slot.start_time, &slot.end_time))
        .collect();

    Ok(conflicts)
}

/// The teacher-assigned slots of one class, joined with teacher and class
/// names. Input rows for the diagnostic conflict report.
pub async fn list_assigned_slots(
    conn: &mut PgConnection,
    class_id: i64,
) -> Result<Vec<DbAssignedSlot>> {
    let rows = sqlx::query_as::<_, DbAssignedSlot>(
        r#"
        SELECT
            tt.id,
            tt.class_id,
            c.name AS class_name,
            tt.day_of_week,
            tt.start_time,
            tt.end_time,
            tt.teacher_user_id,
            u.full_name AS teacher_name
        FROM class_timetable tt
        JOIN users u ON u.id = tt.teacher_user_id
        JOIN classes c ON c.id = tt.class_id
        WHERE tt.class_id = $1 AND tt.teacher_user_id IS NOT NULL
        "#,
    )
    .bind(class_id)
    .fetch_all(conn)
    .await?;

    Ok(rows)
}
