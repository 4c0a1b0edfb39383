use std::str::FromStr;
use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use dronedock_core::{
    errors::RentalError,
    models::{
        schedule::MessageResponse,
        user::{
            LoginRequest, LoginResponse, RegisterRequest, UpdateUserRequest, UserEnvelope,
            UserResponse, UserRole,
        },
    },
};
use dronedock_db::models::DbUser;

use crate::{
    middleware::{auth, auth::AuthUser, error_handling::AppError},
    ApiState,
};

fn user_response(user: DbUser) -> Result<UserResponse, RentalError> {
    Ok(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        role: UserRole::from_str(&user.role)?,
        city: user.city,
        created_at: user.created_at,
    })
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserEnvelope>, AppError> {
    payload.validate()?;

    let password_hash = auth::hash_password(&payload.password)?;

    let db_user = dronedock_db::repositories::user::create_user(
        &state.db_pool,
        &payload.name,
        &payload.email,
        &password_hash,
        payload.role.as_str(),
        &payload.city,
    )
    .await
    .map_err(RentalError::Database)?
    .ok_or_else(|| RentalError::Validation("Email is already registered".to_string()))?;

    Ok(Json(UserEnvelope {
        user: user_response(db_user)?,
    }))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let db_user = dronedock_db::repositories::user::get_user_by_email(&state.db_pool, &payload.email)
        .await
        .map_err(RentalError::Database)?
        .ok_or_else(|| RentalError::Authentication("Invalid email or password".to_string()))?;

    let is_valid = auth::verify_password(&payload.password, &db_user.password_hash)?;
    if !is_valid {
        return Err(AppError(RentalError::Authentication(
            "Invalid email or password".to_string(),
        )));
    }

    let token = auth::issue_token(db_user.id, &state.jwt_secret, state.jwt_expiry_hours)?;

    Ok(Json(LoginResponse {
        token,
        role: UserRole::from_str(&db_user.role)?,
    }))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
) -> Result<Json<UserEnvelope>, AppError> {
    let db_user = dronedock_db::repositories::user::get_user_by_id(&state.db_pool, caller_id)
        .await
        .map_err(RentalError::Database)?
        .ok_or_else(|| RentalError::NotFound(format!("User with ID {} not found", caller_id)))?;

    Ok(Json(UserEnvelope {
        user: user_response(db_user)?,
    }))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserEnvelope>, AppError> {
    // Confirm the caller still exists before mutating
    dronedock_db::repositories::user::get_user_by_id(&state.db_pool, caller_id)
        .await
        .map_err(RentalError::Database)?
        .ok_or_else(|| RentalError::NotFound(format!("User with ID {} not found", caller_id)))?;

    let password_hash = match &payload.password {
        Some(password) => Some(auth::hash_password(password)?),
        None => None,
    };

    let db_user = dronedock_db::repositories::user::update_user(
        &state.db_pool,
        caller_id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        password_hash.as_deref(),
        payload.city.as_deref(),
    )
    .await
    .map_err(RentalError::Database)?;

    Ok(Json(UserEnvelope {
        user: user_response(db_user)?,
    }))
}

/// Tokens are held by the client; logout is an acknowledgement only.
#[axum::debug_handler]
pub async fn logout(
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!("User logged out: {}", caller_id);

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}
