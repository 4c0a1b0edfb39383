//! # Schedule Ledger Handlers
//!
//! The booking ledger maps (drone, date, time slot) to at most one entry.
//! Conflict detection is not a check-then-act in application code: the
//! insert and the uniqueness check are a single statement against the
//! database's unique index, so two concurrent bookings of the same key
//! cannot both succeed regardless of arrival order.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use dronedock_core::{
    errors::RentalError,
    models::{
        schedule::{
            CreateScheduleRequest, DeleteScheduleRequest, MessageResponse, OwnerScheduleResponse,
            OwnerSchedulesResponse, ScheduleEntryResponse,
        },
        time_slot::TimeSlot,
    },
};
use dronedock_db::models::DbSchedule;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

fn schedule_entry(schedule: DbSchedule) -> Result<ScheduleEntryResponse, RentalError> {
    Ok(ScheduleEntryResponse {
        date: schedule.scheduled_date,
        time_slot: TimeSlot::from_str(&schedule.time_slot)?,
    })
}

#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
    Path(drone_id): Path<Uuid>,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let drone = dronedock_db::repositories::drone::get_drone_by_id(&state.db_pool, drone_id)
        .await
        .map_err(RentalError::Database)?
        .ok_or_else(|| RentalError::NotFound(format!("Drone with ID {} not found", drone_id)))?;

    // Permissive by default: any authenticated caller may book any drone.
    // The flag tightens this to the drone's owner.
    if state.require_owner_booking && drone.owner_id != caller_id {
        return Err(AppError(RentalError::Authorization(
            "Only the drone owner may book this drone".to_string(),
        )));
    }

    let created = dronedock_db::repositories::schedule::create_schedule(
        &state.db_pool,
        drone_id,
        payload.date,
        payload.time_slot.as_str(),
        caller_id,
    )
    .await
    .map_err(RentalError::Database)?;

    if created.is_none() {
        return Err(AppError(RentalError::Conflict(format!(
            "Drone is already booked for {} ({})",
            payload.date, payload.time_slot
        ))));
    }

    Ok(Json(MessageResponse {
        message: "Schedule booked successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
    Path(drone_id): Path<Uuid>,
    Json(payload): Json<DeleteScheduleRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(
        "Cancellation requested by {}: drone_id={}, date={}, time_slot={}",
        caller_id,
        drone_id,
        payload.date,
        payload.time_slot
    );

    let removed = dronedock_db::repositories::schedule::delete_schedule(
        &state.db_pool,
        drone_id,
        payload.date,
        payload.time_slot.as_str(),
    )
    .await
    .map_err(RentalError::Database)?;

    // A repeated delete of the same key reports not-found rather than
    // silently succeeding.
    if !removed {
        return Err(AppError(RentalError::NotFound(format!(
            "No booking found for {} ({})",
            payload.date, payload.time_slot
        ))));
    }

    Ok(Json(MessageResponse {
        message: "Schedule deleted successfully".to_string(),
    }))
}

/// Read-only report across all drones owned by the caller: each drone's
/// name paired with its full booking list. An owner with no drones gets an
/// empty list, never an error.
#[axum::debug_handler]
pub async fn get_owner_schedules(
    State(state): State<Arc<ApiState>>,
    Extension(AuthUser(caller_id)): Extension<AuthUser>,
) -> Result<Json<OwnerSchedulesResponse>, AppError> {
    let drones = dronedock_db::repositories::drone::get_drones_by_owner(&state.db_pool, caller_id)
        .await
        .map_err(RentalError::Database)?;

    let mut schedules = Vec::with_capacity(drones.len());
    for drone in drones {
        let entries =
            dronedock_db::repositories::schedule::get_schedules_by_drone(&state.db_pool, drone.id)
                .await
                .map_err(RentalError::Database)?
                .into_iter()
                .map(schedule_entry)
                .collect::<Result<Vec<_>, _>>()?;

        schedules.push(OwnerScheduleResponse {
            drone_name: drone.name,
            drone_schedule: entries,
        });
    }

    Ok(Json(OwnerSchedulesResponse { schedules }))
}
