//! User management API handlers
//!
//! CRUD + filtered-search endpoints. Delegates to `UserService` from the
//! application layer; handlers only shape requests and responses.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, FilterDto, UpdateUserRequest, UserDto};
use crate::application::users::{UserForm, UserService};
use crate::domain::{DomainError, UpdateUserDto, UserFilter};
use crate::infrastructure::database::repositories::UserRepository;
use crate::infrastructure::http::{FreeAreaHttpClient, PrivateAreaHttpClient};
use crate::interfaces::http::common::{ApiResponse, PageParams, PaginatedResponse, ValidatedJson};

/// The service as wired in production.
pub type AppUserService = UserService<UserRepository, FreeAreaHttpClient, PrivateAreaHttpClient>;

/// User handler state — concrete over the production repository and
/// clients for Axum compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<AppUserService>,
}

fn error_status(e: &DomainError) -> StatusCode {
    match e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::InvalidAgeRange(_)
        | DomainError::InvalidBirthdate(_)
        | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Remote(_) => StatusCode::BAD_GATEWAY,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_reply<T>(e: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (error_status(&e), Json(ApiResponse::error(e.to_string())))
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, enriched with area details", body = [UserDto]),
        (status = 502, description = "A sibling service failed")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.user_service.find_all().await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.user_service.find_by_id(id).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/email/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user_by_email(
    State(state): State<UserHandlerState>,
    Path(email): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.user_service.find_by_email(&email).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/username/{username}",
    tag = "Users",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user_by_username(
    State(state): State<UserHandlerState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    match state.user_service.find_by_username(&username).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/filter",
    tag = "Users",
    params(FilterDto, PageParams),
    responses(
        (status = 200, description = "Matching users, enriched", body = PaginatedResponse<FilterDto>),
        (status = 400, description = "Invalid age range")
    )
)]
pub async fn filter_users(
    State(state): State<UserHandlerState>,
    Query(filter): Query<FilterDto>,
    Query(page): Query<PageParams>,
) -> Result<Json<PaginatedResponse<FilterDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let predicates = UserFilter {
        age_from: filter.age_from,
        age_to: filter.age_to,
        sex: filter.sex,
        city: filter.city,
        country: filter.country,
        is_enabled: filter.is_enabled,
    };

    match state
        .user_service
        .filter(predicates, Some(page.page), Some(page.size))
        .await
    {
        Ok(result) => Ok(Json(PaginatedResponse::from_result(
            result,
            FilterDto::from_enriched,
        ))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid age range or birthdate"),
        (status = 409, description = "Username or email already taken"),
        (status = 422, description = "Malformed fields")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), (StatusCode, Json<ApiResponse<UserDto>>)> {
    let form = UserForm {
        username: request.username,
        email: request.email,
        password: request.password,
        birthdate: request.birthdate,
        sex: request.sex,
        city: request.city,
        country: request.country,
        description: request.description,
        age_from: request.age_from,
        age_to: request.age_to,
        sex_preference: request.sex_preference,
    };

    match state.user_service.save(form).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(UserDto::from(user))),
        )),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 400, description = "Field gate failed"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<UserDto>>)> {
    let dto = UpdateUserDto {
        free_area_id: request.free_area_id,
        username: request.username,
        email: request.email,
        password: request.password,
        city: request.city,
        country: request.country,
        description: request.description,
    };

    match state.user_service.edit(id, dto).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(error_reply(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.user_service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_reply(e)),
    }
}
