//! Administration routes
//!
//! Role changes (admin only) and the redacted user listing (moderator and
//! admin). Access is enforced by the route layers in [`super::create_router`].

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use authgate_shared::{ChangeRoleRequest, RoleChangeResponse, UserSummary};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

/// Change another user's role
///
/// POST /admin/change-role
pub async fn change_role(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<ChangeRoleRequest>, JsonRejection>,
) -> ApiResult<Json<RoleChangeResponse>> {
    let Json(req) = payload?;
    let user = UserService::change_role(state.users(), req.user_id, req.new_role).await?;

    info!(admin_id = caller.user_id, target_id = user.id, "role change applied");
    Ok(Json(RoleChangeResponse {
        message: "User role updated successfully".to_string(),
        user: user.into(),
    }))
}

/// List all users without password material
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserSummary>> {
    Json(UserService::list_users(state.users()).await)
}
