use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/v1/locationdets/fillDetails",
            post(handlers::location::fill_details),
        )
        .route(
            "/api/v1/locationdets/getDetails",
            get(handlers::location::get_details),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_auth))
}
