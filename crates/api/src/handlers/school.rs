//! Supporting listings for the timetable admin UI: classes, subjects, and
//! teachers. Read-only, behind the same admin guard as the timetable
//! endpoints.

use axum::{extract::State, Json};
use std::sync::Arc;

use classtime_core::{
    errors::SchoolError,
    models::school::{ClassSummary, SubjectSummary, TeacherSummary},
};
use classtime_db::repositories::school;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_classes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ClassSummary>>, AppError> {
    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let classes = school::list_classes(&mut conn)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(
        classes
            .into_iter()
            .map(|class| ClassSummary {
                id: class.id,
                name: class.name,
            })
            .collect(),
    ))
}

#[axum::debug_handler]
pub async fn list_subjects(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<SubjectSummary>>, AppError> {
    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let subjects = school::list_subjects(&mut conn)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(
        subjects
            .into_iter()
            .map(|subject| SubjectSummary {
                id: subject.id,
                name: subject.name,
            })
            .collect(),
    ))
}

#[axum::debug_handler]
pub async fn list_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<TeacherSummary>>, AppError> {
    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let teachers = school::list_teachers(&mut conn)
        .await
        .map_err(SchoolError::Database)?;

    Ok(Json(
        teachers
            .into_iter()
            .map(|teacher| TeacherSummary {
                id: teacher.id,
                full_name: teacher.full_name,
                email: teacher.email,
            })
            .collect(),
    ))
}
