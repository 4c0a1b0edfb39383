use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, middleware::auth, ApiState};

pub fn routes(state: Arc<ApiState>) -> Router<Arc<ApiState>> {
    let protected = Router::new()
        .route("/api/v1/user/getUser", get(handlers::user::get_user))
        .route("/api/v1/user/update", put(handlers::user::update_user))
        .route("/api/v1/user/logout", post(handlers::user::logout))
        .route_layer(middleware::from_fn_with_state(state, auth::require_auth));

    Router::new()
        .route("/api/v1/user/register", post(handlers::user::register))
        .route("/api/v1/user/login", post(handlers::user::login))
        .merge(protected)
}
