use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistEntry;

/// One joined row: the entry plus its product, with the product columns
/// aliased `product_*`.
#[derive(Debug, FromRow)]
pub struct WishlistEntryEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub added_at: DateTime<Utc>,
    pub product_id: Uuid,
    pub product_name: String,
    pub product_description: String,
    pub product_price: BigDecimal,
    pub product_image_url: String,
    pub product_stock: i32,
    pub product_is_active: bool,
    pub product_category: String,
    pub product_created_at: DateTime<Utc>,
    pub product_updated_at: DateTime<Utc>,
}

impl WishlistEntryEntity {
    pub fn into_domain(self) -> WishlistEntry {
        let product = Product::from_repository(
            self.product_id,
            self.product_name,
            self.product_description,
            self.product_price,
            self.product_image_url,
            self.product_stock,
            self.product_is_active,
            self.product_category,
            self.product_created_at,
            self.product_updated_at,
        );
        WishlistEntry::from_repository(self.id, UserId::new(self.user_id), product, self.added_at)
    }
}
