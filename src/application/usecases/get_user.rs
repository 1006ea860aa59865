use std::sync::Arc;

use crate::domain::{errors::DomainError, models::UserWithAge, repositories::UserRepository};

use super::with_current_age;

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32) -> Result<UserWithAge, DomainError> {
        let user = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;
        Ok(with_current_age(user))
    }
}
