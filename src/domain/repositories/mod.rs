use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::User;

/// Persistence seam for the `users` table. Absent rows are signalled with
/// `None`/`false`, never with an error; the usecases decide what absence
/// means for the caller.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, name: &str, date_of_birth: NaiveDate) -> anyhow::Result<User>;
    async fn get(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn update(
        &self,
        id: i32,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> anyhow::Result<Option<User>>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
