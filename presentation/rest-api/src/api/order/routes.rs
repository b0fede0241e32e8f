use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::delete::{DeleteOrderParams, DeleteOrderUseCase};
use business::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    delete_use_case: Arc<dyn DeleteOrderUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
        delete_use_case: Arc<dyn DeleteOrderUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_status_use_case,
            delete_use_case,
        }
    }
}

/// Order API
///
/// All operations are scoped to the caller's own orders.
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Orders one unit of the given product, decrementing its stock
    /// atomically. Fails when the product is missing, inactive, or sold out.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(
        &self,
        auth: BearerAuth,
        body: Json<PlaceOrderRequest>,
    ) -> PlaceOrderResponse {
        match self
            .place_use_case
            .execute(PlaceOrderParams {
                user_id: auth.0.id,
                product_id: body.0.product_id,
            })
            .await
        {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    404 => PlaceOrderResponse::NotFound(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List the caller's orders
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_all_orders(&self, auth: BearerAuth) -> GetAllOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetAllOrdersParams { user_id: auth.0.id })
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> = orders.into_iter().map(|o| o.into()).collect();
                GetAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order by ID
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: BearerAuth, id: Path<String>) -> GetOrderByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetOrderByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid order id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                id: uuid,
                user_id: auth.0.id,
            })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an order's status
    ///
    /// The status string is stored verbatim.
    #[oai(path = "/orders/:id", method = "put", tag = "ApiTags::Orders")]
    async fn update_order_status(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid order id",
                )));
            }
        };

        match self
            .update_status_use_case
            .execute(UpdateOrderStatusParams {
                id: uuid,
                user_id: auth.0.id,
                status: body.0.status,
            })
            .await
        {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an order
    #[oai(path = "/orders/:id", method = "delete", tag = "ApiTags::Orders")]
    async fn delete_order(&self, auth: BearerAuth, id: Path<String>) -> DeleteOrderResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteOrderResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid order id",
                )));
            }
        };

        match self
            .delete_use_case
            .execute(DeleteOrderParams {
                id: uuid,
                user_id: auth.0.id,
            })
            .await
        {
            Ok(()) => DeleteOrderResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteOrderResponse::NotFound(json),
                    _ => DeleteOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteOrderResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
