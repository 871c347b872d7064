//! Authentication middleware
//!
//! Axum adapters around the gates in [`super::gate`]:
//! - [`auth_middleware`] runs the authentication gate and attaches the
//!   verified [`Claims`] to the request extensions
//! - [`require_roles`] runs the authorization gate against the
//!   [`AllowedRoles`] the route was built with
//! - [`AuthUser`] hands the verified claims to handlers
//!
//! Routes layer `require_roles` inside `auth_middleware`, so a request is
//! authenticated before it is authorized.

use super::gate;
use super::jwt::Claims;
use super::rbac::AllowedRoles;
use crate::error::ApiError;
use crate::state::AppState;
use authgate_shared::AuthError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Authenticated caller, as verified from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    /// Claims are only ever attached by [`auth_middleware`]; a handler
    /// mounted outside it gets the authorization gate's ordering error.
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                warn!(path = %parts.uri.path(), "handler reached without verified claims");
                AuthError::NoRoleInformation.into()
            })
    }
}

/// Authentication gate as middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let claims = gate::authenticate(header, state.jwt()).map_err(|e| {
        warn!(path = %request.uri().path(), reason = %e, "authentication rejected");
        e
    })?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Authorization gate as middleware
///
/// Attach with `middleware::from_fn_with_state(AllowedRoles::ADMIN, require_roles)`.
pub async fn require_roles(
    State(allowed): State<AllowedRoles>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(e) = gate::authorize(request.extensions().get::<Claims>(), allowed) {
        warn!(
            path = %request.uri().path(),
            role = ?request.extensions().get::<Claims>().map(|c| c.role),
            allowed = ?allowed,
            reason = %e,
            "authorization rejected"
        );
        return Err(e.into());
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtService;
    use authgate_shared::{Role, UserSummary};
    use axum::{
        body::Body,
        http::StatusCode,
        middleware,
        response::IntoResponse,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn claims(role: Role) -> Claims {
        let jwt = JwtService::new("middleware-test");
        let token = jwt
            .issue(&UserSummary {
                id: 9,
                email: "mw@example.com".to_string(),
                name: "Mw".to_string(),
                role,
            })
            .unwrap();
        jwt.verify(&token).unwrap()
    }

    fn guarded(allowed: AllowedRoles) -> Router {
        Router::new().route(
            "/guarded",
            get(|| async { "ok" })
                .route_layer(middleware::from_fn_with_state(allowed, require_roles)),
        )
    }

    #[tokio::test]
    async fn test_require_roles_without_claims_is_403() {
        let request = axum::http::Request::builder()
            .uri("/guarded")
            .body(Body::empty())
            .unwrap();

        let response = guarded(AllowedRoles::ANY).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_require_roles_with_allowed_claims() {
        let mut request = axum::http::Request::builder()
            .uri("/guarded")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(claims(Role::Moderator));

        let response = guarded(AllowedRoles::STAFF).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_require_roles_with_disallowed_claims() {
        let mut request = axum::http::Request::builder()
            .uri("/guarded")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(claims(Role::User));

        let response = guarded(AllowedRoles::STAFF).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_auth_user_from_attached_claims() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/profile")
            .body(())
            .unwrap()
            .into_parts();
        let expected = claims(Role::Admin);
        parts.extensions.insert(expected.clone());

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, expected);
    }

    #[tokio::test]
    async fn test_auth_user_without_claims_ignores_header() {
        let jwt = JwtService::new("middleware-test");
        let token = jwt
            .issue(&UserSummary {
                id: 9,
                email: "mw@example.com".to_string(),
                name: "Mw".to_string(),
                role: Role::Admin,
            })
            .unwrap();
        // A valid bearer header alone does not authenticate the extractor
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/profile")
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .body(())
            .unwrap()
            .into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_auth_user_debug() {
        let user = AuthUser(claims(Role::User));
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("AuthUser"));
    }
}
