//! Authentication and authorization gates
//!
//! Each gate is a plain function returning `Ok` to continue with the
//! verified context or `Err` with the rejection reason. The middleware in
//! [`super::middleware`] runs them in order and stops at the first failure.
//! There is no combined entry point: authorization only ever sees claims that
//! authentication attached.

use super::jwt::{Claims, JwtService};
use super::rbac::AllowedRoles;
use authgate_shared::AuthError;
use tracing::warn;

/// Scheme prefix expected in the `Authorization` header (case-sensitive)
pub const BEARER_PREFIX: &str = "Bearer ";

/// Authentication gate: header value to verified claims
pub fn authenticate(header: Option<&str>, jwt: &JwtService) -> Result<Claims, AuthError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::MissingOrInvalidHeader)?;

    jwt.verify(token).map_err(|e| {
        warn!(reason = %e, "token rejected");
        AuthError::from(e)
    })
}

/// Authorization gate: verified claims plus policy to allow/deny
///
/// `None` means no claims were attached upstream, which is an ordering
/// problem rather than a caller error.
pub fn authorize(claims: Option<&Claims>, allowed: AllowedRoles) -> Result<&Claims, AuthError> {
    let claims = claims.ok_or(AuthError::NoRoleInformation)?;

    if !allowed.allows(claims.role) {
        return Err(AuthError::Forbidden);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::TOKEN_TTL_SECS;
    use authgate_shared::{Role, UserSummary};
    use chrono::Utc;
    use rstest::rstest;

    /// Both gates in the order the router applies them
    fn pipeline(
        header: Option<&str>,
        jwt: &JwtService,
        allowed: AllowedRoles,
    ) -> Result<Claims, AuthError> {
        let claims = authenticate(header, jwt)?;
        authorize(Some(&claims), allowed)?;
        Ok(claims)
    }

    fn service() -> JwtService {
        JwtService::new("gate-test-secret")
    }

    fn token_for(jwt: &JwtService, role: Role) -> String {
        jwt.issue(&UserSummary {
            id: 1,
            email: "gate@example.com".to_string(),
            name: "Gate".to_string(),
            role,
        })
        .unwrap()
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            authenticate(None, &service()),
            Err(AuthError::MissingOrInvalidHeader)
        );
    }

    #[rstest]
    #[case("Basic dXNlcjpwYXNz")]
    #[case("bearer abc.def.ghi")]
    #[case("BEARER abc.def.ghi")]
    #[case("Bearerabc.def.ghi")]
    #[case("abc.def.ghi")]
    #[case("")]
    fn test_malformed_header(#[case] header: &str) {
        assert_eq!(
            authenticate(Some(header), &service()),
            Err(AuthError::MissingOrInvalidHeader)
        );
    }

    #[test]
    fn test_bad_token_after_valid_prefix() {
        assert_eq!(
            authenticate(Some("Bearer not-a-token"), &service()),
            Err(AuthError::InvalidOrExpiredToken)
        );
        assert_eq!(
            authenticate(Some("Bearer "), &service()),
            Err(AuthError::InvalidOrExpiredToken)
        );
    }

    #[test]
    fn test_expired_token() {
        let jwt = service();
        let token = jwt
            .issue_at(
                &UserSummary {
                    id: 1,
                    email: "gate@example.com".to_string(),
                    name: "Gate".to_string(),
                    role: Role::Admin,
                },
                Utc::now().timestamp() - TOKEN_TTL_SECS,
            )
            .unwrap();

        assert_eq!(
            authenticate(Some(&format!("Bearer {}", token)), &jwt),
            Err(AuthError::InvalidOrExpiredToken)
        );
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let jwt = service();
        let token = token_for(&jwt, Role::Moderator);
        let claims = authenticate(Some(&format!("Bearer {}", token)), &jwt).unwrap();

        assert_eq!(claims.role, Role::Moderator);
        assert_eq!(claims.email, "gate@example.com");
    }

    #[test]
    fn test_authorize_without_claims() {
        assert_eq!(
            authorize(None, AllowedRoles::ANY),
            Err(AuthError::NoRoleInformation)
        );
    }

    #[rstest]
    #[case(AllowedRoles::ADMIN, Role::Admin, true)]
    #[case(AllowedRoles::ADMIN, Role::Moderator, false)]
    #[case(AllowedRoles::ADMIN, Role::User, false)]
    #[case(AllowedRoles::STAFF, Role::Admin, true)]
    #[case(AllowedRoles::STAFF, Role::Moderator, true)]
    #[case(AllowedRoles::STAFF, Role::User, false)]
    #[case(AllowedRoles::ANY, Role::Admin, true)]
    #[case(AllowedRoles::ANY, Role::Moderator, true)]
    #[case(AllowedRoles::ANY, Role::User, true)]
    fn test_pipeline_role_matrix(
        #[case] allowed: AllowedRoles,
        #[case] role: Role,
        #[case] permitted: bool,
    ) {
        let jwt = service();
        let header = format!("Bearer {}", token_for(&jwt, role));
        let result = pipeline(Some(&header), &jwt, allowed);

        if permitted {
            let claims = result.unwrap();
            assert_eq!(claims.role, role);
        } else {
            assert_eq!(result, Err(AuthError::Forbidden));
        }
    }

    #[test]
    fn test_authorize_passes_claims_through_unchanged() {
        let jwt = service();
        let claims = jwt.verify(&token_for(&jwt, Role::Admin)).unwrap();
        let passed = authorize(Some(&claims), AllowedRoles::ADMIN).unwrap();
        assert_eq!(passed, &claims);
    }

    #[test]
    fn test_pipeline_stops_at_authentication() {
        // Authentication failure wins over any authorization outcome
        assert_eq!(
            pipeline(None, &service(), AllowedRoles::ADMIN),
            Err(AuthError::MissingOrInvalidHeader)
        );
    }
}
