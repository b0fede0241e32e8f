use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::wishlist::model::WishlistEntry;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddWishlistEntryRequest {
    /// Product to wish for
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct WishlistEntryResponse {
    pub id: String,
    /// Owning account id
    pub user: String,
    pub product: ProductResponse,
    pub added_at: DateTime<Utc>,
}

impl From<WishlistEntry> for WishlistEntryResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            user: entry.user_id.to_string(),
            product: entry.product.into(),
            added_at: entry.added_at,
        }
    }
}
