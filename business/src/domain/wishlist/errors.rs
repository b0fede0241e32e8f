#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.product_not_found")]
    ProductNotFound,
    #[error("wishlist.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
