use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            OrderError::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found"),
            OrderError::OutOfStock => (StatusCode::BAD_REQUEST, "Product out of stock"),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "Order not found"),
            OrderError::Repository(_) => {
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
    fn should_map_out_of_stock_to_400() {
        let (status, body) = OrderError::OutOfStock.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.error, "Product out of stock");
    }

    #[test]
    fn should_map_missing_product_to_404() {
        let (status, body) = OrderError::ProductNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.error, "Product not found");
    }
}
