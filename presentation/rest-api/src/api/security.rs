use poem::Request;
use poem_openapi::SecurityScheme;

use auth::token::JwtCredentialIssuer;
use business::domain::shared::value_objects::UserId;

use crate::config::auth_config::AuthConfig;

/// Identity established from a validated access token.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: UserId,
    pub username: String,
}

/// Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "bearer_checker")]
pub struct BearerAuth(pub Caller);

async fn bearer_checker(_req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<Caller> {
    let config = AuthConfig::from_env();
    let issuer = JwtCredentialIssuer::new(&config.jwt);

    match issuer.decode_access(&bearer.token) {
        Some(claims) => Some(Caller {
            id: UserId::new(claims.sub),
            username: claims.username,
        }),
        None => {
            tracing::warn!("Bearer auth failed: invalid or expired access token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::token::JwtConfig;
    use business::domain::account::services::CredentialIssuer;
    use chrono::Duration;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(14),
        }
    }

    #[test]
    fn should_accept_valid_access_token() {
        let issuer = JwtCredentialIssuer::new(&test_config());
        let account_id = Uuid::new_v4();

        let pair = issuer.issue(account_id, "alice").unwrap();
        let claims = issuer.decode_access(&pair.access).unwrap();

        assert_eq!(claims.sub, account_id);
    }

    #[test]
    fn should_reject_refresh_token() {
        let issuer = JwtCredentialIssuer::new(&test_config());

        let pair = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        assert!(issuer.decode_access(&pair.refresh).is_none());
    }

    #[test]
    fn should_reject_malformed_token() {
        let issuer = JwtCredentialIssuer::new(&test_config());

        assert!(issuer.decode_access("not-a-jwt").is_none());
    }
}
