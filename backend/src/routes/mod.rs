//! Route definitions for the Authgate API
//!
//! This module organizes all API routes and applies middleware.
//!
//! Every protected route is wrapped as: `auth_middleware` (router-level
//! route layer) then `require_roles` with the route's [`AllowedRoles`].

use crate::auth::{auth_middleware, require_roles, AllowedRoles};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod admin;
mod areas;
mod auth;
mod health;


pub use auth::auth_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/public", get(areas::public))
        .merge(auth::auth_routes())
        .merge(protected_routes(&state))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Routes behind the authentication gate, each with its own role set
fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(auth::profile))
        .route(
            "/user-area",
            get(areas::user_area)
                .route_layer(middleware::from_fn_with_state(AllowedRoles::ANY, require_roles)),
        )
        .route(
            "/moderator-area",
            get(areas::moderator_area)
                .route_layer(middleware::from_fn_with_state(AllowedRoles::STAFF, require_roles)),
        )
        .route(
            "/admin-area",
            get(areas::admin_area)
                .route_layer(middleware::from_fn_with_state(AllowedRoles::ADMIN, require_roles)),
        )
        .route(
            "/admin/change-role",
            post(admin::change_role)
                .route_layer(middleware::from_fn_with_state(AllowedRoles::ADMIN, require_roles)),
        )
        .route(
            "/users",
            get(admin::list_users)
                .route_layer(middleware::from_fn_with_state(AllowedRoles::STAFF, require_roles)),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
