use std::sync::Arc;

use crate::domain::{errors::DomainError, models::UserWithAge, repositories::UserRepository};

use super::with_current_age;

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<UserWithAge>, DomainError> {
        let users = self.repo.list().await?;
        Ok(users.into_iter().map(with_current_age).collect())
    }
}
