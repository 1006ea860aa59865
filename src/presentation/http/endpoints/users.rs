use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::UserPayloadDto,
        responses::{
            CreateUserResponse, DeleteUserResponse, ErrorDto, GetUserResponse, ListUsersResponse,
            UpdateUserResponse,
        },
    },
};

#[derive(Clone)]
pub struct UserEndpoints {
    state: Arc<ApiState>,
}

impl UserEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UserEndpoints {
    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, request: Json<UserPayloadDto>) -> CreateUserResponse {
        let payload = CreateUserRequest {
            name: request.0.name,
            date_of_birth: request.0.dob,
        };

        match self.state.create_user.execute(payload).await {
            Ok(user) => CreateUserResponse::Created(Json(map_user(&user))),
            Err(DomainError::Validation(message)) => {
                CreateUserResponse::BadRequest(Json(ErrorDto { message }))
            }
            Err(err) => CreateUserResponse::InternalServerError(internal_error(&err)),
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<i32>) -> GetUserResponse {
        match self.state.get_user.execute(id.0).await {
            Ok(user) => GetUserResponse::Ok(Json(map_user(&user))),
            Err(DomainError::NotFound(message)) => {
                GetUserResponse::NotFound(Json(ErrorDto { message }))
            }
            Err(err) => GetUserResponse::InternalServerError(internal_error(&err)),
        }
    }

    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersResponse {
        match self.state.list_users.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => ListUsersResponse::InternalServerError(internal_error(&err)),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<i32>,
        request: Json<UserPayloadDto>,
    ) -> UpdateUserResponse {
        let payload = UpdateUserRequest {
            id: id.0,
            name: request.0.name,
            date_of_birth: request.0.dob,
        };

        match self.state.update_user.execute(payload).await {
            Ok(user) => UpdateUserResponse::Ok(Json(map_user(&user))),
            Err(DomainError::Validation(message)) => {
                UpdateUserResponse::BadRequest(Json(ErrorDto { message }))
            }
            Err(DomainError::NotFound(message)) => {
                UpdateUserResponse::NotFound(Json(ErrorDto { message }))
            }
            Err(err) => UpdateUserResponse::InternalServerError(internal_error(&err)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<i32>) -> DeleteUserResponse {
        match self.state.delete_user.execute(id.0).await {
            Ok(()) => DeleteUserResponse::Deleted,
            Err(DomainError::NotFound(message)) => {
                DeleteUserResponse::NotFound(Json(ErrorDto { message }))
            }
            Err(err) => DeleteUserResponse::InternalServerError(internal_error(&err)),
        }
    }
}

/// Full cause goes to the log; the client only ever sees a generic message.
fn internal_error(err: &DomainError) -> Json<ErrorDto> {
    tracing::error!(error = %err, "store operation failed");
    Json(ErrorDto {
        message: "internal server error".to_string(),
    })
}
