use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::AccountError;

/// Identity and profile data merged into a single aggregate.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewAccountProps {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
}

impl Account {
    pub fn new(props: NewAccountProps) -> Result<Self, AccountError> {
        if props.username.trim().is_empty() {
            return Err(AccountError::UsernameEmpty);
        }
        if props.email.trim().is_empty() {
            return Err(AccountError::EmailEmpty);
        }
        if props.password_hash.is_empty() {
            return Err(AccountError::PasswordEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            username: props.username,
            email: props.email,
            password_hash: props.password_hash,
            first_name: props.first_name,
            last_name: props.last_name,
            phone_number: props.phone_number,
            address: props.address,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        username: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        phone_number: String,
        address: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            first_name,
            last_name,
            phone_number,
            address,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(username: &str, email: &str, hash: &str) -> NewAccountProps {
        NewAccountProps {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            address: String::new(),
        }
    }

    #[test]
    fn should_create_account_when_required_fields_present() {
        let result = Account::new(props("alice", "alice@example.com", "phc-hash"));

        assert!(result.is_ok());
        let account = result.unwrap();
        assert_eq!(account.username, "alice");
        assert_eq!(account.email, "alice@example.com");
    }

    #[test]
    fn should_reject_when_username_empty() {
        let result = Account::new(props("  ", "alice@example.com", "phc-hash"));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AccountError::UsernameEmpty));
    }

    #[test]
    fn should_reject_when_email_empty() {
        let result = Account::new(props("alice", "", "phc-hash"));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AccountError::EmailEmpty));
    }

    #[test]
    fn should_reject_when_password_hash_empty() {
        let result = Account::new(props("alice", "alice@example.com", ""));

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AccountError::PasswordEmpty));
    }
}
