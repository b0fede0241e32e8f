use std::env;

use auth::token::JwtConfig;
use chrono::Duration;

/// Token issuance and validation configuration
///
/// Environment variables:
/// - JWT_SECRET: HS256 signing secret (required)
/// - ACCESS_TOKEN_TTL_SECONDS: Access token lifetime (default: 900)
/// - REFRESH_TOKEN_TTL_SECONDS: Refresh token lifetime (default: 1209600)
pub struct AuthConfig {
    pub jwt: JwtConfig,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let access_seconds = env::var("ACCESS_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(900);
        let refresh_seconds = env::var("REFRESH_TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(1_209_600);

        Self {
            jwt: JwtConfig {
                secret,
                access_ttl: Duration::seconds(access_seconds),
                refresh_ttl: Duration::seconds(refresh_seconds),
            },
        }
    }
}
