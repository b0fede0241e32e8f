use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::wishlist::use_cases::add::{
    AddWishlistEntryParams, AddWishlistEntryUseCase,
};
use business::domain::wishlist::use_cases::get_all::{
    GetAllWishlistEntriesParams, GetAllWishlistEntriesUseCase,
};
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistEntryByIdParams, GetWishlistEntryByIdUseCase,
};
use business::domain::wishlist::use_cases::remove::{
    RemoveWishlistEntryParams, RemoveWishlistEntryUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{AddWishlistEntryRequest, WishlistEntryResponse};

pub struct WishlistApi {
    add_use_case: Arc<dyn AddWishlistEntryUseCase>,
    get_all_use_case: Arc<dyn GetAllWishlistEntriesUseCase>,
    get_by_id_use_case: Arc<dyn GetWishlistEntryByIdUseCase>,
    remove_use_case: Arc<dyn RemoveWishlistEntryUseCase>,
}

impl WishlistApi {
    pub fn new(
        add_use_case: Arc<dyn AddWishlistEntryUseCase>,
        get_all_use_case: Arc<dyn GetAllWishlistEntriesUseCase>,
        get_by_id_use_case: Arc<dyn GetWishlistEntryByIdUseCase>,
        remove_use_case: Arc<dyn RemoveWishlistEntryUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            get_all_use_case,
            get_by_id_use_case,
            remove_use_case,
        }
    }
}

/// Wishlist API
///
/// All operations are scoped to the caller's own wishlist.
#[OpenApi]
impl WishlistApi {
    /// Add a product to the wishlist
    ///
    /// Idempotent per product: re-adding returns the existing entry, still
    /// with status 201.
    #[oai(path = "/wishlist", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_entry(
        &self,
        auth: BearerAuth,
        body: Json<AddWishlistEntryRequest>,
    ) -> AddWishlistEntryResponse {
        match self
            .add_use_case
            .execute(AddWishlistEntryParams {
                user_id: auth.0.id,
                product_id: body.0.product_id,
            })
            .await
        {
            Ok(entry) => AddWishlistEntryResponse::Created(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddWishlistEntryResponse::NotFound(json),
                    _ => AddWishlistEntryResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's wishlist
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_all_entries(&self, auth: BearerAuth) -> GetAllWishlistEntriesResponse {
        match self
            .get_all_use_case
            .execute(GetAllWishlistEntriesParams { user_id: auth.0.id })
            .await
        {
            Ok(entries) => {
                let responses: Vec<WishlistEntryResponse> =
                    entries.into_iter().map(|e| e.into()).collect();
                GetAllWishlistEntriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllWishlistEntriesResponse::InternalError(json)
            }
        }
    }

    /// Get a wishlist entry by ID
    #[oai(path = "/wishlist/:id", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_entry_by_id(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> GetWishlistEntryByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetWishlistEntryByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid wishlist entry id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetWishlistEntryByIdParams {
                id: uuid,
                user_id: auth.0.id,
            })
            .await
        {
            Ok(entry) => GetWishlistEntryByIdResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetWishlistEntryByIdResponse::NotFound(json),
                    _ => GetWishlistEntryByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a wishlist entry
    #[oai(path = "/wishlist/:id", method = "delete", tag = "ApiTags::Wishlist")]
    async fn remove_entry(&self, auth: BearerAuth, id: Path<String>) -> RemoveWishlistEntryResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return RemoveWishlistEntryResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid wishlist entry id",
                )));
            }
        };

        match self
            .remove_use_case
            .execute(RemoveWishlistEntryParams {
                id: uuid,
                user_id: auth.0.id,
            })
            .await
        {
            Ok(()) => RemoveWishlistEntryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveWishlistEntryResponse::NotFound(json),
                    _ => RemoveWishlistEntryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWishlistEntryResponse {
    #[oai(status = 201)]
    Created(Json<WishlistEntryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllWishlistEntriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistEntryByIdResponse {
    #[oai(status = 200)]
    Ok(Json<WishlistEntryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveWishlistEntryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
