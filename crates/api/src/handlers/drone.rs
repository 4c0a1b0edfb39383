use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use dronedock_core::{
    errors::RentalError,
    models::drone::{
        CreateDroneRequest, DroneDetailResponse, DroneListResponse, DroneResponse, DroneSummary,
        OwnerDronesResponse,
    },
};
use dronedock_db::models::DbDrone;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

pub(crate) fn drone_response(drone: DbDrone) -> DroneResponse {
    DroneResponse {
        id: drone.id,
        owner_id: drone.owner_id,
        name: drone.name,
        drone_type: drone.drone_type,
        capacity: drone.capacity,
        price_per_acre: drone.price_per_acre,
        durability: drone.durability,
        purchased_date: drone.purchased_date,
        is_ngo: drone.is_ngo,
        ngo_name: drone.ngo_name,
        created_at: drone.created_at,
    }
}

pub(crate) fn drone_summary(drone: DbDrone) -> DroneSummary {
    DroneSummary {
        id: drone.id,
        name: drone.name,
        drone_type: drone.drone_type,
        capacity: drone.capacity,
        price_per_acre: drone.price_per_acre,
        durability: drone.durability,
    }
}

#[axum::debug_handler]
pub async fn add_drone(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
    Json(payload): Json<CreateDroneRequest>,
) -> Result<Json<DroneResponse>, AppError> {
    payload.validate()?;

    let db_drone = dronedock_db::repositories::drone::create_drone(
        &state.db_pool,
        caller_id,
        &payload.name,
        &payload.drone_type,
        payload.capacity,
        payload.price_per_acre,
        payload.durability,
        payload.purchased_date,
        payload.is_ngo,
        payload.ngo_name.as_deref(),
    )
    .await
    .map_err(RentalError::Database)?;

    Ok(Json(drone_response(db_drone)))
}

#[axum::debug_handler]
pub async fn get_drone_details(
    State(state): State<Arc<ApiState>>,
    Path(drone_id): Path<Uuid>,
) -> Result<Json<DroneDetailResponse>, AppError> {
    let db_drone = dronedock_db::repositories::drone::get_drone_by_id(&state.db_pool, drone_id)
        .await
        .map_err(RentalError::Database)?
        .ok_or_else(|| RentalError::NotFound(format!("Drone with ID {} not found", drone_id)))?;

    Ok(Json(DroneDetailResponse {
        drone_detail: drone_response(db_drone),
    }))
}

/// Global discovery listing; returns the field-limited projection.
#[axum::debug_handler]
pub async fn get_all_drones(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<DroneListResponse>, AppError> {
    let db_drones = dronedock_db::repositories::drone::get_all_drones(&state.db_pool)
        .await
        .map_err(RentalError::Database)?;

    Ok(Json(DroneListResponse {
        drones: db_drones.into_iter().map(drone_summary).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_owner_drones(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
) -> Result<Json<OwnerDronesResponse>, AppError> {
    let db_drones =
        dronedock_db::repositories::drone::get_drones_by_owner(&state.db_pool, caller_id)
            .await
            .map_err(RentalError::Database)?;

    Ok(Json(OwnerDronesResponse {
        drones: db_drones.into_iter().map(drone_response).collect(),
    }))
}
