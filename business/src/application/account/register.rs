use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::{Account, NewAccountProps};
use crate::domain::account::repository::AccountRepository;
use crate::domain::account::services::{CredentialIssuer, PasswordHasher};
use crate::domain::account::use_cases::register::{
    AuthenticatedAccount, RegisterParams, RegisterUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RegisterUseCaseImpl {
    pub repository: Arc<dyn AccountRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub credential_issuer: Arc<dyn CredentialIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUseCase for RegisterUseCaseImpl {
    async fn execute(&self, params: RegisterParams) -> Result<AuthenticatedAccount, AccountError> {
        self.logger
            .info(&format!("Registering account: {}", params.username));

        if params.password.trim().is_empty() {
            return Err(AccountError::PasswordEmpty);
        }

        let password_hash = self.password_hasher.hash(&params.password)?;

        let account = Account::new(NewAccountProps {
            username: params.username,
            email: params.email,
            password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            phone_number: params.phone_number,
            address: params.address,
        })?;

        self.repository.save(&account).await.map_err(|e| match e {
            RepositoryError::Duplicated => AccountError::UsernameTaken,
            other => AccountError::Repository(other),
        })?;

        let tokens = self.credential_issuer.issue(account.id, &account.username)?;

        self.logger
            .info(&format!("Account created with id: {}", account.id));
        Ok(AuthenticatedAccount { account, tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::services::{CredentialError, TokenPair};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub AccountRepo {}

        #[async_trait]
        impl AccountRepository for AccountRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Account, RepositoryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;
            async fn save(&self, account: &Account) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Hasher {}

        impl PasswordHasher for Hasher {
            fn hash(&self, plain: &str) -> Result<String, CredentialError>;
            fn verify(&self, phc: &str, plain: &str) -> bool;
        }
    }

    mock! {
        pub Issuer {}

        impl CredentialIssuer for Issuer {
            fn issue(&self, account_id: Uuid, username: &str) -> Result<TokenPair, CredentialError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn mock_hasher() -> Arc<dyn PasswordHasher> {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|_| Ok("phc-hash".to_string()));
        hasher.expect_verify().returning(|_, _| true);
        Arc::new(hasher)
    }

    fn mock_issuer() -> Arc<dyn CredentialIssuer> {
        let mut issuer = MockIssuer::new();
        issuer.expect_issue().returning(|_, _| {
            Ok(TokenPair {
                access: "access-token".to_string(),
                refresh: "refresh-token".to_string(),
            })
        });
        Arc::new(issuer)
    }

    fn params(username: &str, password: &str) -> RegisterParams {
        RegisterParams {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: password.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            address: String::new(),
        }
    }

    #[tokio::test]
    async fn should_register_and_issue_tokens() {
        let mut mock_repo = MockAccountRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = RegisterUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: mock_hasher(),
            credential_issuer: mock_issuer(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice", "pw123")).await;

        assert!(result.is_ok());
        let authed = result.unwrap();
        assert_eq!(authed.account.username, "alice");
        assert_eq!(authed.account.password_hash, "phc-hash");
        assert_eq!(authed.tokens.access, "access-token");
        assert_eq!(authed.tokens.refresh, "refresh-token");
    }

    #[tokio::test]
    async fn should_reject_when_password_empty() {
        let mock_repo = MockAccountRepo::new();

        let use_case = RegisterUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: mock_hasher(),
            credential_issuer: mock_issuer(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice", "   ")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AccountError::PasswordEmpty));
    }

    #[tokio::test]
    async fn should_reject_when_username_taken() {
        let mut mock_repo = MockAccountRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = RegisterUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: mock_hasher(),
            credential_issuer: mock_issuer(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice", "pw123")).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AccountError::UsernameTaken));
    }

    #[tokio::test]
    async fn should_never_store_plaintext_password() {
        let mut mock_repo = MockAccountRepo::new();
        mock_repo
            .expect_save()
            .withf(|account: &Account| account.password_hash != "pw123")
            .returning(|_| Ok(()));

        let use_case = RegisterUseCaseImpl {
            repository: Arc::new(mock_repo),
            password_hasher: mock_hasher(),
            credential_issuer: mock_issuer(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("alice", "pw123")).await;

        assert!(result.is_ok());
    }
}
