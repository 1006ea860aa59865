use chrono::NaiveDate;
use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub age: i32,
}

#[derive(Object)]
pub struct ErrorDto {
    pub message: String,
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorDto>),
}

// Payloads the framework refuses to parse (missing field, bad date, failed
// validator) must still come back as a `{"message": ...}` object, same as the
// service-side 400s.
fn create_bad_request(err: poem::Error) -> CreateUserResponse {
    CreateUserResponse::BadRequest(Json(ErrorDto {
        message: err.to_string(),
    }))
}

fn update_bad_request(err: poem::Error) -> UpdateUserResponse {
    UpdateUserResponse::BadRequest(Json(ErrorDto {
        message: err.to_string(),
    }))
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    /// Row removed, nothing to return.
    #[oai(status = 204)]
    Deleted,
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
    #[oai(status = 500)]
    InternalServerError(Json<ErrorDto>),
}
