//! Authentication routes
//!
//! Provides endpoints for user registration, login and the caller's profile.
//!
//! # Performance Optimizations
//!
//! - Uses pre-computed JWT keys from AppState (no per-request allocation)
//! - Password hashing runs on blocking thread pool (doesn't block async runtime)

use crate::auth::{AuthUser, Claims};
use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use authgate_shared::{
    ClaimsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use validator::Validate;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(req) = payload?;
    req.validate()?;

    let (Some(email), Some(password), Some(name)) = (req.email, req.password, req.name) else {
        return Err(ApiError::Validation(
            crate::error::REQUIRED_FIELDS_MESSAGE.to_string(),
        ));
    };

    let user = UserService::register(state.users(), &email, &password, &name, req.role).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(req) = payload?;
    let outcome = UserService::login(state.users(), state.jwt(), &req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}

/// Get current user's claims (requires authentication)
///
/// GET /profile
pub(super) async fn profile(AuthUser(claims): AuthUser) -> Json<ClaimsResponse<Claims>> {
    Json(ClaimsResponse {
        message: "Profile accessed successfully".to_string(),
        user: claims,
    })
}
