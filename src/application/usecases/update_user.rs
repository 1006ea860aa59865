use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::{
    errors::DomainError,
    models::{UserWithAge, validate_fields},
    repositories::UserRepository,
};

use super::with_current_age;

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<UserWithAge, DomainError> {
        validate_fields(
            &request.name,
            request.date_of_birth,
            Utc::now().date_naive(),
        )?;
        let user = self
            .repo
            .update(request.id, &request.name, request.date_of_birth)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {}", request.id)))?;
        Ok(with_current_age(user))
    }
}
