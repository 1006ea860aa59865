use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{models::User, repositories::UserRepository};

/// Map-backed store for tests. `BTreeMap` iterates in key order, so `list`
/// comes back sorted by id like the SQL `ORDER BY id ASC`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: BTreeMap<i32, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, name: &str, date_of_birth: NaiveDate) -> anyhow::Result<User> {
        let mut store = self.inner.write().await;
        store.next_id += 1;
        let user = User {
            id: store.next_id,
            name: name.to_string(),
            date_of_birth,
        };
        store.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: i32) -> anyhow::Result<Option<User>> {
        let store = self.inner.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let store = self.inner.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> anyhow::Result<Option<User>> {
        let mut store = self.inner.write().await;
        Ok(store.rows.get_mut(&id).map(|user| {
            user.name = name.to_string();
            user.date_of_birth = date_of_birth;
            user.clone()
        }))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let mut store = self.inner.write().await;
        Ok(store.rows.remove(&id).is_some())
    }
}
