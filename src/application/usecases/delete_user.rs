use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: i32) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::NotFound(format!("user {id}")));
        }
        Ok(())
    }
}
