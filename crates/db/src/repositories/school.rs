use eyre::Result;
use sqlx::PgConnection;

use crate::models::{DbClass, DbSubject, DbTeacher};

pub async fn class_exists(conn: &mut PgConnection, class_id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM classes WHERE id = $1)
        "#,
    )
    .bind(class_id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

pub async fn subject_exists(conn: &mut PgConnection, subject_id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (SELECT 1 FROM subjects WHERE id = $1)
        "#,
    )
    .bind(subject_id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

/// True only for users that currently hold the teacher role.
pub async fn teacher_exists(conn: &mut PgConnection, teacher_user_id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM users u
            JOIN roles r ON r.id = u.role_id AND r.name = 'teacher'
            WHERE u.id = $1
        )
        "#,
    )
    .bind(teacher_user_id)
    .fetch_one(conn)
    .await?;

    Ok(exists)
}

pub async fn list_classes(conn: &mut PgConnection) -> Result<Vec<DbClass>> {
    let classes = sqlx::query_as::<_, DbClass>(
        r#"
        SELECT id, name
        FROM classes
        ORDER BY name
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(classes)
}

pub async fn list_subjects(conn: &mut PgConnection) -> Result<Vec<DbSubject>> {
    let subjects = sqlx::query_as::<_, DbSubject>(
        r#"
        SELECT id, name
        FROM subjects
        ORDER BY name
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(subjects)
}

pub async fn list_teachers(conn: &mut PgConnection) -> Result<Vec<DbTeacher>> {
    let teachers = sqlx::query_as::<_, DbTeacher>(
        r#"
        SELECT u.id, u.full_name, u.email
        FROM users u
        JOIN roles r ON r.id = u.role_id AND r.name = 'teacher'
        WHERE u.status = 'active'
        ORDER BY u.full_name
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(teachers)
}
