use argon2::{Argon2, PasswordVerifier};
use eyre::{eyre, Result};
use sqlx::PgConnection;

use crate::models::DbUser;

pub async fn get_user_by_email(conn: &mut PgConnection, email: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by email: {}", email);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT u.id, u.full_name, u.email, u.password_hash, r.name AS role, u.status
        FROM users u
        JOIN roles r ON r.id = u.role_id
        WHERE u.email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}

/// Looks up an active user by email and checks the password against the
/// stored Argon2 hash. Returns `None` for unknown, inactive, or
/// wrong-password attempts alike; the caller surfaces one generic
/// authentication failure.
pub async fn verify_credentials(
    conn: &mut PgConnection,
    email: &str,
    password: &str,
) -> Result<Option<DbUser>> {
    let Some(user) = get_user_by_email(conn, email).await? else {
        return Ok(None);
    };

    if user.status != "active" {
        return Ok(None);
    }

    let parsed_hash = argon2::PasswordHash::new(&user.password_hash)
        .map_err(|e| eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid.then_some(user))
}
