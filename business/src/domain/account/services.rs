use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential.hashing_failed")]
    HashingFailed,
    #[error("credential.issuance_failed")]
    IssuanceFailed,
}

/// Access/refresh bearer tokens issued at register and login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Port for password storage. Implemented by the auth infrastructure adapter.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, CredentialError>;
    fn verify(&self, phc: &str, plain: &str) -> bool;
}

/// Port for bearer-token issuance. Implemented by the auth infrastructure adapter.
pub trait CredentialIssuer: Send + Sync {
    fn issue(&self, account_id: Uuid, username: &str) -> Result<TokenPair, CredentialError>;
}
