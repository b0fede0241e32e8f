use chrono::{DateTime, Utc};
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Decimal string, must parse and be >= 0 (e.g. "19.99")
    pub price: String,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Units in stock (>= 0, default 0)
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Whether the product can be ordered (default true)
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Decimal string, must parse and be >= 0
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Decimal string, e.g. "19.99"
    pub price: String,
    pub image_url: String,
    pub stock: i32,
    pub is_active: bool,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            image_url: product.image_url,
            stock: product.stock,
            is_active: product.is_active,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
