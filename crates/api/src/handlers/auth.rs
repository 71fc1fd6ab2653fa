use axum::{extract::State, Json};
use std::sync::Arc;

use classtime_core::{
    errors::SchoolError,
    models::auth::{LoginRequest, LoginResponse},
};
use classtime_db::repositories::users;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

/// Exchanges email and password for a signed bearer token. Unknown users,
/// inactive accounts, and wrong passwords all produce the same generic
/// failure.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = payload.email.trim().to_lowercase();

    let mut conn = state
        .db_pool
        .acquire()
        .await
        .map_err(|e| SchoolError::Database(e.into()))?;

    let user = users::verify_credentials(&mut conn, &email, &payload.password)
        .await
        .map_err(SchoolError::Database)?
        .ok_or_else(|| SchoolError::Authentication("Invalid email or password".to_string()))?;

    let token = auth::create_token(
        &state.jwt_secret,
        user.id,
        &user.role,
        &user.email,
        &user.full_name,
        state.jwt_expires_min,
    )
    .map_err(SchoolError::Database)?;

    Ok(Json(LoginResponse {
        token,
        role: user.role,
        full_name: user.full_name,
        email: user.email,
    }))
}
