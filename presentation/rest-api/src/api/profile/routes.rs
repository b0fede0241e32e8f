use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::account::use_cases::delete_profile::{
    DeleteProfileParams, DeleteProfileUseCase,
};
use business::domain::account::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::account::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::account::use_cases::register::{RegisterParams, RegisterUseCase};
use business::domain::account::use_cases::update_profile::{
    UpdateProfileParams, UpdateProfileUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{
    AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UpdateProfileRequest,
};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    register_use_case: Arc<dyn RegisterUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
    delete_profile_use_case: Arc<dyn DeleteProfileUseCase>,
}

impl ProfileApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        update_profile_use_case: Arc<dyn UpdateProfileUseCase>,
        delete_profile_use_case: Arc<dyn DeleteProfileUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            get_profile_use_case,
            update_profile_use_case,
            delete_profile_use_case,
        }
    }
}

/// Identity and profile API
///
/// Registration and login are public; everything else requires a bearer
/// access token and is restricted to the caller's own record.
#[OpenApi]
impl ProfileApi {
    /// Register a new account
    ///
    /// Creates the account and returns it together with an access/refresh
    /// token pair.
    #[oai(path = "/profiles", method = "post", tag = "ApiTags::Profiles")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterParams {
            username: body.0.username,
            email: body.0.email,
            password: body.0.password,
            first_name: body.0.first_name.unwrap_or_default(),
            last_name: body.0.last_name.unwrap_or_default(),
            phone_number: body.0.phone_number.unwrap_or_default(),
            address: body.0.address.unwrap_or_default(),
        };

        match self.register_use_case.execute(params).await {
            Ok(authenticated) => RegisterResponse::Created(Json(authenticated.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with username and password
    ///
    /// Returns a fresh access/refresh token pair on success.
    #[oai(path = "/login", method = "post", tag = "ApiTags::Profiles")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(authenticated) => LoginResponse::Ok(Json(authenticated.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the caller's own profile
    #[oai(path = "/profiles", method = "get", tag = "ApiTags::Profiles")]
    async fn get_own_profile(&self, auth: BearerAuth) -> GetProfileResponse {
        match self
            .get_profile_use_case
            .execute(GetProfileParams {
                caller: auth.0.id,
                id: None,
            })
            .await
        {
            Ok(account) => GetProfileResponse::Ok(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProfileResponse::NotFound(json),
                    _ => GetProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a profile by ID
    ///
    /// Only the caller's own ID is accepted; any other ID yields 403.
    #[oai(path = "/profiles/:id", method = "get", tag = "ApiTags::Profiles")]
    async fn get_profile(&self, auth: BearerAuth, id: Path<String>) -> GetProfileByIdResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetProfileByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid profile id",
                )));
            }
        };

        match self
            .get_profile_use_case
            .execute(GetProfileParams {
                caller: auth.0.id,
                id: Some(uuid),
            })
            .await
        {
            Ok(account) => GetProfileByIdResponse::Ok(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetProfileByIdResponse::Forbidden(json),
                    404 => GetProfileByIdResponse::NotFound(json),
                    _ => GetProfileByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a profile
    ///
    /// Partial update: absent fields retain their stored values. Only the
    /// caller's own ID is accepted.
    #[oai(path = "/profiles/:id", method = "put", tag = "ApiTags::Profiles")]
    async fn update_profile(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateProfileRequest>,
    ) -> UpdateProfileResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProfileResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid profile id",
                )));
            }
        };

        let params = UpdateProfileParams {
            caller: auth.0.id,
            id: uuid,
            username: body.0.username,
            email: body.0.email,
            password: body.0.password,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            phone_number: body.0.phone_number,
            address: body.0.address,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(account) => UpdateProfileResponse::Ok(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProfileResponse::BadRequest(json),
                    403 => UpdateProfileResponse::Forbidden(json),
                    404 => UpdateProfileResponse::NotFound(json),
                    _ => UpdateProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a profile
    ///
    /// Hard delete. Only the caller's own ID is accepted.
    #[oai(path = "/profiles/:id", method = "delete", tag = "ApiTags::Profiles")]
    async fn delete_profile(&self, auth: BearerAuth, id: Path<String>) -> DeleteProfileResponse {
        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return DeleteProfileResponse::BadRequest(Json(ErrorResponse::new(
                    "Invalid profile id",
                )));
            }
        };

        match self
            .delete_profile_use_case
            .execute(DeleteProfileParams {
                caller: auth.0.id,
                id: uuid,
            })
            .await
        {
            Ok(()) => DeleteProfileResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteProfileResponse::Forbidden(json),
                    404 => DeleteProfileResponse::NotFound(json),
                    _ => DeleteProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<AuthResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProfileResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
