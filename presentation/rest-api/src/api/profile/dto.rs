use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::account::model::Account;
use business::domain::account::use_cases::register::AuthenticatedAccount;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Unique login name (cannot be empty)
    pub username: String,
    /// Contact email (cannot be empty)
    pub email: String,
    /// Plaintext password, hashed before storage (cannot be empty)
    pub password: String,
    #[oai(skip_serializing_if_is_none)]
    pub first_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub last_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone_number: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProfileRequest {
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    /// Re-hashed when supplied
    #[oai(skip_serializing_if_is_none)]
    pub password: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub first_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub last_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone_number: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
}

/// Identity summary embedded in the register/login response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AuthResponse {
    pub user: UserSummary,
    /// Access bearer token
    pub access: String,
    /// Refresh bearer token
    pub refresh: String,
}

impl From<AuthenticatedAccount> for AuthResponse {
    fn from(authenticated: AuthenticatedAccount) -> Self {
        Self {
            user: UserSummary {
                id: authenticated.account.id.to_string(),
                username: authenticated.account.username,
                email: authenticated.account.email,
            },
            access: authenticated.tokens.access,
            refresh: authenticated.tokens.refresh,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for ProfileResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            phone_number: account.phone_number,
            address: account.address,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
