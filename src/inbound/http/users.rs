//! Users API handlers.
//!
//! ```text
//! GET /users
//! POST /users {"firstName":"Ada","lastName":"Lovelace"}
//! GET /users/{id}
//! PUT /users/{id} {"id":"...","firstName":"Ada","lastName":"Lovelace"}
//! DELETE /users/{id}
//! ```
//!
//! Any other method on these paths answers 501; a path that is neither the
//! collection nor a single identifier segment answers 404.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, NewUser, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, id_mismatch_error, missing_field_error, parse_person_name,
};

const FIELD_ID: FieldName = FieldName::new("id");
const FIELD_FIRST_NAME: FieldName = FieldName::new("firstName");
const FIELD_LAST_NAME: FieldName = FieldName::new("lastName");

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request body for `PUT /users/{id}`.
///
/// The `id` field is required and must match the path identifier.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Response payload for a stored user.
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            first_name: value.first_name().as_ref().to_owned(),
            last_name: value.last_name().as_ref().to_owned(),
        }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => Error::service_unavailable(message),
        UserPersistenceError::Query { message } => Error::internal(message),
    }
}

/// Parse a path identifier, answering 404 when it is not a valid UUID.
///
/// An identifier that cannot have been assigned by the store names a record
/// that cannot exist, so the miss is reported the same way.
fn parse_path_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found(format!("no user with id {raw}")))
}

fn parse_create_request(payload: CreateUserRequest) -> Result<NewUser, Error> {
    let first_name = parse_person_name(payload.first_name, FIELD_FIRST_NAME)?;
    let last_name = parse_person_name(payload.last_name, FIELD_LAST_NAME)?;
    Ok(NewUser::new(first_name, last_name))
}

fn parse_update_request(path_id: UserId, payload: UpdateUserRequest) -> Result<User, Error> {
    let body_id = payload.id.ok_or_else(|| missing_field_error(FIELD_ID))?;
    if body_id != path_id.to_string() {
        return Err(id_mismatch_error(FIELD_ID));
    }

    let first_name = parse_person_name(payload.first_name, FIELD_FIRST_NAME)?;
    let last_name = parse_person_name(payload.last_name, FIELD_LAST_NAME)?;
    Ok(User::new(path_id, first_name, last_name))
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state
        .users
        .list()
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a user and return it with its store-assigned identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Stored user", body = UserResponse),
        (status = 400, description = "Validation failure", body = ErrorSchema),
        (status = 500, description = "Malformed body or internal error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let new_user = parse_create_request(payload.into_inner())?;
    let user = state
        .users
        .insert(new_user)
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(user.into()))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Stored user", body = UserResponse),
        (status = 404, description = "No matching user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let raw = path.into_inner();
    let id = parse_path_id(&raw)?;
    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no user with id {raw}")))?;
    Ok(web::Json(user.into()))
}

/// Replace a stored user in place; the identifier is immutable.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failure or id mismatch", body = ErrorSchema),
        (status = 404, description = "No matching user", body = ErrorSchema),
        (status = 500, description = "Malformed body or internal error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let raw = path.into_inner();
    let id = parse_path_id(&raw)?;
    let user = parse_update_request(id, payload.into_inner())?;
    let updated = state
        .users
        .update(&user)
        .await
        .map_err(map_persistence_error)?
        .ok_or_else(|| Error::not_found(format!("no user with id {raw}")))?;
    Ok(web::Json(updated.into()))
}

/// Delete a stored user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "No matching user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let id = parse_path_id(&raw)?;
    let removed = state
        .users
        .remove(&id)
        .await
        .map_err(map_persistence_error)?;
    if !removed {
        return Err(Error::not_found(format!("no user with id {raw}")));
    }
    Ok(HttpResponse::Ok().finish())
}

/// Resource shape addressed by an otherwise-unmatched request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UsersTarget {
    Collection,
    Item,
}

fn users_target(path: &str) -> Option<UsersTarget> {
    if path == "/users" {
        return Some(UsersTarget::Collection);
    }
    let rest = path.strip_prefix("/users/")?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(UsersTarget::Item)
}

/// Classify a request no registered route accepted.
///
/// A users path reached with an unregistered method answers 501; anything
/// else answers 404.
pub(crate) fn classify_unmatched(path: &str) -> Error {
    match users_target(path) {
        Some(_) => Error::not_implemented("method not supported on this resource"),
        None => Error::not_found("no resource matches the requested path"),
    }
}

/// Fallback handler wired as the application's default service.
pub async fn unmatched_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(classify_unmatched(req.path()))
}
