//! # Authentication Module
//!
//! This module provides authentication-related utilities for the ClassTime API:
//! password hashing for stored users, HS256 bearer-token signing and
//! verification, and the admin guard applied to every `/admin` route.
//!
//! The guard is the single authorization point of the service. Handlers
//! behind it trust the asserted role and perform no further checks.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use eyre::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use classtime_core::errors::SchoolError;

use crate::{middleware::error_handling::AppError, ApiState};

/// Claims carried by a ClassTime bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified.
    pub sub: String,
    pub role: String,
    pub email: String,
    pub full_name: String,
    pub exp: usize,
}

/// Signs a bearer token for an authenticated user.
///
/// # Arguments
///
/// * `secret` - HS256 signing secret
/// * `user_id` - Identity of the authenticated user
/// * `role` - Role name the token asserts
/// * `email`, `full_name` - Presentation claims for the UI
/// * `expires_min` - Token lifetime in minutes
pub fn create_token(
    secret: &str,
    user_id: i64,
    role: &str,
    email: &str,
    full_name: &str,
    expires_min: i64,
) -> Result<String> {
    let exp = chrono::Utc::now() + chrono::Duration::minutes(expires_min);
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        exp: exp.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| eyre::eyre!("Error signing token: {}", e))?;

    Ok(token)
}

/// Verifies a bearer token's signature and expiry, returning its claims.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Hashes a password using the Argon2 algorithm
///
/// This function securely hashes passwords before storage in the database,
/// automatically generating a random salt and using industry-standard
/// parameters for Argon2.
///
/// # Security Notes
///
/// - Uses a random salt for each password
/// - Uses default Argon2 parameters (memory: 19MiB, iterations: 3, parallelism: 4)
/// - Returns password in PHC string format (includes algorithm, version, parameters, salt, and hash)
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Admin guard middleware.
///
/// Extracts the `Authorization: Bearer <token>` header (scheme matched
/// case-insensitively), verifies the token, and requires the `admin` role.
/// Missing or invalid tokens yield 401; a valid token with any other role
/// yields 403. The verified claims are stored in request extensions for
/// handlers that want the caller's identity.
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| SchoolError::Authentication("Missing token".to_string()))?;

    let token = match header_value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => return Err(AppError(SchoolError::Authentication("Missing token".to_string()))),
    };

    let claims = decode_token(&state.jwt_secret, token)
        .map_err(|_| SchoolError::Authentication("Invalid token".to_string()))?;

    if claims.role != "admin" {
        return Err(AppError(SchoolError::Authorization("Admin only".to_string())));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
