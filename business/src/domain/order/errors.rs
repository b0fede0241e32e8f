#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.product_not_found")]
    ProductNotFound,
    #[error("order.out_of_stock")]
    OutOfStock,
    #[error("order.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
