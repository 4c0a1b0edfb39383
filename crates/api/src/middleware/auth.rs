//! # Authentication Module
//!
//! Bearer-token verification and password hashing for the DroneDock API.
//!
//! Tokens are JWTs signed with the configured `JWT_SECRET`, carrying the
//! caller's user id as the subject claim. The `require_auth` middleware
//! verifies the token before any protected handler runs and injects the
//! resolved identity as an [`AuthUser`] request extension, so handlers take
//! the caller id as an explicit value rather than reading ambient state.
//!
//! Password storage uses Argon2 with a random per-password salt.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use eyre::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dronedock_core::errors::RentalError;

use crate::{middleware::error_handling::AppError, ApiState};

/// JWT claims carried by a DroneDock bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id
    pub sub: Uuid,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at (Unix timestamp)
    pub iat: u64,
}

/// The caller identity resolved by [`require_auth`], available to handlers
/// as a request extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Hashes a password using the Argon2 algorithm with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a plain text password against a stored Argon2 hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| eyre::eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(is_valid)
}

/// Issues a signed bearer token for the given user.
pub fn issue_token(user_id: Uuid, secret: &str, expiry_hours: u64) -> Result<String> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| eyre::eyre!("System clock error: {}", e))?
        .as_secs();

    let claims = Claims {
        sub: user_id,
        exp: now + expiry_hours * 3600,
        iat: now,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

/// Verifies a bearer token's signature and expiry, returning the caller id.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, RentalError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| RentalError::Authentication(format!("Invalid token: {}", e)))?;

    Ok(data.claims.sub)
}

/// Extracts the token from an `Authorization` header value.
///
/// Accepts both `Bearer <token>` and a bare token, which is what the mobile
/// client sends.
pub fn extract_token(header_value: &str) -> &str {
    header_value.strip_prefix("Bearer ").unwrap_or(header_value)
}

/// Middleware guarding every protected route: resolves the caller identity
/// from the `Authorization` header or rejects the request with 401 before
/// the handler runs.
pub async fn require_auth(
    State(state): State<Arc<ApiState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header_value = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError(RentalError::Authentication("Token not sent".to_string()))
        })?;

    let user_id = verify_token(extract_token(header_value), &state.jwt_secret)?;

    request.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(request).await)
}
