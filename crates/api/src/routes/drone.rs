use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

/// Drone registry and booking-ledger endpoints. All of them require a
/// bearer token; the booking paths carry the drone id in the URL and the
/// (date, timeSlot) key in the body, matching the mobile client.
pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/v1/drone/addDrone", post(handlers::drone::add_drone))
        .route(
            "/api/v1/drone/getDroneDetails/:id",
            get(handlers::drone::get_drone_details),
        )
        .route(
            "/api/v1/drone/getAllDrones",
            get(handlers::drone::get_all_drones),
        )
        .route(
            "/api/v1/drone/getAllDroneOfDroneOwner",
            get(handlers::drone::get_owner_drones),
        )
        .route(
            "/api/v1/drone/getAllSchedulesOfDroneOwner",
            get(handlers::schedule::get_owner_schedules),
        )
        .route(
            "/api/v1/drone/createSchedule/:id",
            post(handlers::schedule::create_schedule),
        )
        .route(
            "/api/v1/drone/deleteSchedule/:id",
            post(handlers::schedule::delete_schedule),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_auth))
}
