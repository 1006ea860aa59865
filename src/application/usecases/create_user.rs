use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::domain::{
    errors::DomainError,
    models::{UserWithAge, validate_fields},
    repositories::UserRepository,
};

use super::with_current_age;

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<UserWithAge, DomainError> {
        validate_fields(
            &request.name,
            request.date_of_birth,
            Utc::now().date_naive(),
        )?;
        let user = self
            .repo
            .insert(&request.name, request.date_of_birth)
            .await?;
        Ok(with_current_age(user))
    }
}
