use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            image_url: params.image_url,
            stock: params.stock,
            is_active: params.is_active,
            category: params.category,
        })?;

        self.logger
            .info(&format!("Creating product: {}", product.id));

        self.repository.save(&product).await?;

        Ok(product)
    }
}
