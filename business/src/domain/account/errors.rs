use super::services::CredentialError;

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account.username_empty")]
    UsernameEmpty,
    #[error("account.email_empty")]
    EmailEmpty,
    #[error("account.password_empty")]
    PasswordEmpty,
    #[error("account.username_taken")]
    UsernameTaken,
    #[error("account.invalid_credentials")]
    InvalidCredentials,
    #[error("account.forbidden")]
    Forbidden,
    #[error("account.not_found")]
    NotFound,
    #[error("account.credential_failure")]
    Credential(#[from] CredentialError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
