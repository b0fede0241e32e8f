use std::sync::Arc;

use auth::password::Argon2PasswordHasher;
use auth::token::JwtCredentialIssuer;
use logger::tracing_logger::TracingLogger;
use persistence::account::repository::AccountRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use business::application::account::delete_profile::DeleteProfileUseCaseImpl;
use business::application::account::get_profile::GetProfileUseCaseImpl;
use business::application::account::login::LoginUseCaseImpl;
use business::application::account::register::RegisterUseCaseImpl;
use business::application::account::update_profile::UpdateProfileUseCaseImpl;
use business::application::order::delete::DeleteOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::wishlist::add::AddWishlistEntryUseCaseImpl;
use business::application::wishlist::get_all::GetAllWishlistEntriesUseCaseImpl;
use business::application::wishlist::get_by_id::GetWishlistEntryByIdUseCaseImpl;
use business::application::wishlist::remove::RemoveWishlistEntryUseCaseImpl;

use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub profile_api: crate::api::profile::routes::ProfileApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub wishlist_api: crate::api::wishlist::routes::WishlistApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let account_repository = Arc::new(AccountRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(pool));

        let auth_config = AuthConfig::from_env();
        let password_hasher = Arc::new(Argon2PasswordHasher);
        let credential_issuer = Arc::new(JwtCredentialIssuer::new(&auth_config.jwt));

        // Account use cases
        let register_use_case = Arc::new(RegisterUseCaseImpl {
            repository: account_repository.clone(),
            password_hasher: password_hasher.clone(),
            credential_issuer: credential_issuer.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: account_repository.clone(),
            password_hasher: password_hasher.clone(),
            credential_issuer,
            logger: logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: account_repository.clone(),
            logger: logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            repository: account_repository.clone(),
            password_hasher,
            logger: logger.clone(),
        });
        let delete_profile_use_case = Arc::new(DeleteProfileUseCaseImpl {
            repository: account_repository,
            logger: logger.clone(),
        });

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            order_repository: order_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let update_order_status_use_case = Arc::new(UpdateOrderStatusUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let delete_order_use_case = Arc::new(DeleteOrderUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Wishlist use cases
        let add_wishlist_entry_use_case = Arc::new(AddWishlistEntryUseCaseImpl {
            wishlist_repository: wishlist_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let get_all_wishlist_entries_use_case = Arc::new(GetAllWishlistEntriesUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let get_wishlist_entry_by_id_use_case = Arc::new(GetWishlistEntryByIdUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let remove_wishlist_entry_use_case = Arc::new(RemoveWishlistEntryUseCaseImpl {
            repository: wishlist_repository,
            logger,
        });

        let profile_api = crate::api::profile::routes::ProfileApi::new(
            register_use_case,
            login_use_case,
            get_profile_use_case,
            update_profile_use_case,
            delete_profile_use_case,
        );

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            place_order_use_case,
            get_all_orders_use_case,
            get_order_by_id_use_case,
            update_order_status_use_case,
            delete_order_use_case,
        );

        let wishlist_api = crate::api::wishlist::routes::WishlistApi::new(
            add_wishlist_entry_use_case,
            get_all_wishlist_entries_use_case,
            get_wishlist_entry_by_id_use_case,
            remove_wishlist_entry_use_case,
        );

        Ok(Self {
            health_api,
            profile_api,
            product_api,
            order_api,
            wishlist_api,
        })
    }
}
