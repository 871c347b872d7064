//! Demonstration resources, one per access level

use crate::auth::{AuthUser, Claims};
use authgate_shared::{ClaimsResponse, MessageResponse};
use axum::Json;

/// GET /public
pub async fn public() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "This is a public endpoint, no authentication required".to_string(),
    })
}

/// GET /user-area
pub async fn user_area(AuthUser(claims): AuthUser) -> Json<ClaimsResponse<Claims>> {
    area("Welcome to the user area", claims)
}

/// GET /moderator-area
pub async fn moderator_area(AuthUser(claims): AuthUser) -> Json<ClaimsResponse<Claims>> {
    area("Welcome to the moderator area", claims)
}

/// GET /admin-area
pub async fn admin_area(AuthUser(claims): AuthUser) -> Json<ClaimsResponse<Claims>> {
    area("Welcome to the admin area", claims)
}

fn area(message: &str, claims: Claims) -> Json<ClaimsResponse<Claims>> {
    Json(ClaimsResponse {
        message: message.to_string(),
        user: claims,
    })
}
