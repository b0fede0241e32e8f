use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::account::services::{CredentialError, CredentialIssuer, TokenPair};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    /// "access" or "refresh".
    pub token_type: String,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 adapter for the domain's credential port.
pub struct JwtCredentialIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtCredentialIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        }
    }

    fn encode(
        &self,
        account_id: Uuid,
        username: &str,
        token_type: &str,
        ttl: Duration,
    ) -> Result<String, CredentialError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id,
            username: username.to_string(),
            token_type: token_type.to_string(),
            jti: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| CredentialError::IssuanceFailed)
    }

    /// Validates signature and expiry, and rejects anything that is not an
    /// access token (a refresh token must not grant API access).
    pub fn decode_access(&self, token: &str) -> Option<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .ok()?;
        if claims.token_type != "access" {
            return None;
        }
        Some(claims)
    }
}

impl CredentialIssuer for JwtCredentialIssuer {
    fn issue(&self, account_id: Uuid, username: &str) -> Result<TokenPair, CredentialError> {
        let access = self.encode(account_id, username, "access", self.access_ttl)?;
        let refresh = self.encode(account_id, username, "refresh", self.refresh_ttl)?;
        Ok(TokenPair { access, refresh })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtCredentialIssuer {
        JwtCredentialIssuer::new(&JwtConfig {
            secret: "test-secret".to_string(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(14),
        })
    }

    #[test]
    fn should_decode_issued_access_token() {
        let issuer = issuer();
        let account_id = Uuid::new_v4();

        let pair = issuer.issue(account_id, "alice").unwrap();
        let claims = issuer.decode_access(&pair.access).unwrap();

        assert_eq!(claims.sub, account_id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn should_reject_refresh_token_as_access() {
        let issuer = issuer();

        let pair = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        assert!(issuer.decode_access(&pair.refresh).is_none());
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let pair = issuer().issue(Uuid::new_v4(), "alice").unwrap();

        let other = JwtCredentialIssuer::new(&JwtConfig {
            secret: "different-secret".to_string(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(14),
        });

        assert!(other.decode_access(&pair.access).is_none());
    }

    #[test]
    fn should_reject_expired_token() {
        let expired = JwtCredentialIssuer::new(&JwtConfig {
            secret: "test-secret".to_string(),
            access_ttl: Duration::minutes(-5),
            refresh_ttl: Duration::days(14),
        });

        let pair = expired.issue(Uuid::new_v4(), "alice").unwrap();

        assert!(expired.decode_access(&pair.access).is_none());
    }

    #[test]
    fn should_reject_garbage_token() {
        assert!(issuer().decode_access("not.a.jwt").is_none());
    }
}
