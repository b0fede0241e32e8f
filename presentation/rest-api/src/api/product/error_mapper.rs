use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "Name cannot be empty"),
            ProductError::PriceNegative => (StatusCode::BAD_REQUEST, "Price cannot be negative"),
            ProductError::StockNegative => (StatusCode::BAD_REQUEST, "Stock cannot be negative"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::Repository(_) => {
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
    fn should_map_not_found_to_404() {
        let (status, body) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.error, "Product not found");
    }

    #[test]
    fn should_map_validation_errors_to_400() {
        let (status, _) = ProductError::PriceNegative.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
