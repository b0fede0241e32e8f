use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::account::errors::AccountError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AccountError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            AccountError::UsernameEmpty => (StatusCode::BAD_REQUEST, "Username cannot be empty"),
            AccountError::EmailEmpty => (StatusCode::BAD_REQUEST, "Email cannot be empty"),
            AccountError::PasswordEmpty => (StatusCode::BAD_REQUEST, "Password cannot be empty"),
            AccountError::UsernameTaken => (StatusCode::BAD_REQUEST, "Username already taken"),
            AccountError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AccountError::Forbidden => (
                StatusCode::FORBIDDEN,
                "You can only access your own profile.",
            ),
            AccountError::NotFound => (StatusCode::NOT_FOUND, "Profile not found"),
            AccountError::Credential(_) | AccountError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_credentials_to_401() {
        let (status, body) = AccountError::InvalidCredentials.into_error_response();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0.error, "Invalid credentials");
    }

    #[test]
    fn should_map_forbidden_to_403() {
        let (status, body) = AccountError::Forbidden.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.0.error, "You can only access your own profile.");
    }

    #[test]
    fn should_map_repository_failure_to_500() {
        use business::domain::errors::RepositoryError;

        let (status, _) =
            AccountError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
