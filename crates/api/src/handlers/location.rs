use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use dronedock_core::{
    errors::RentalError,
    models::{
        location::{LocationDetails, LocationDetailsEnvelope},
        schedule::MessageResponse,
    },
};
use dronedock_db::models::DbLocationDetails;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

fn details_response(details: DbLocationDetails) -> LocationDetails {
    LocationDetails {
        address: details.address,
        taluka: details.taluka,
        pin_code: details.pin_code,
        state: details.state,
        whatsapp_number: details.whatsapp_number,
        pan_number: details.pan_number,
        aadhar_number: details.aadhar_number,
        contact_number: details.contact_number,
    }
}

#[axum::debug_handler]
pub async fn fill_details(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
    Json(payload): Json<LocationDetails>,
) -> Result<Json<MessageResponse>, AppError> {
    payload.validate()?;

    dronedock_db::repositories::location::upsert_details(
        &state.db_pool,
        caller_id,
        &payload.address,
        &payload.taluka,
        &payload.pin_code,
        &payload.state,
        &payload.whatsapp_number,
        &payload.pan_number,
        &payload.aadhar_number,
        &payload.contact_number,
    )
    .await
    .map_err(RentalError::Database)?;

    Ok(Json(MessageResponse {
        message: "Details saved successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn get_details(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
) -> Result<Json<LocationDetailsEnvelope>, AppError> {
    let details =
        dronedock_db::repositories::location::get_details_by_user(&state.db_pool, caller_id)
            .await
            .map_err(RentalError::Database)?
            .ok_or_else(|| {
                RentalError::NotFound("Location details not filled yet".to_string())
            })?;

    Ok(Json(LocationDetailsEnvelope {
        user: details_response(details),
    }))
}
