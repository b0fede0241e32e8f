use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::order::model::Order;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Product to order (one unit)
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateOrderStatusRequest {
    /// Free-form status string, stored verbatim
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: String,
    /// Owning account id
    pub user: String,
    /// Snapshot of the ordered product
    pub ordered_item: ProductResponse,
    pub status: String,
    /// Decimal string, product price at placement time
    pub total_price: String,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            user: order.user_id.to_string(),
            ordered_item: order.ordered_item.into(),
            status: order.status,
            total_price: order.total_price.to_string(),
            created_at: order.created_at,
        }
    }
}
