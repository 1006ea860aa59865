use std::sync::Arc;

use poem_openapi::Tags;

use crate::application::usecases::{
    create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
    list_users::ListUsersUseCase, update_user::UpdateUserUseCase,
};

#[derive(Clone)]
pub struct ApiState {
    pub create_user: Arc<CreateUserUseCase>,
    pub get_user: Arc<GetUserUseCase>,
    pub list_users: Arc<ListUsersUseCase>,
    pub update_user: Arc<UpdateUserUseCase>,
    pub delete_user: Arc<DeleteUserUseCase>,
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Users,
}
