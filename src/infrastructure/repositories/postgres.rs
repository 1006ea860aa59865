use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{models::User, repositories::UserRepository};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, name: &str, date_of_birth: NaiveDate) -> anyhow::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"INSERT INTO users (name, dob) VALUES ($1, $2) RETURNING id, name, dob"#,
        )
        .bind(name)
        .bind(date_of_birth)
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn get(&self, id: i32) -> anyhow::Result<Option<User>> {
        let record =
            sqlx::query_as::<_, UserRecord>(r#"SELECT id, name, dob FROM users WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(record.map(User::from))
    }

    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let rows =
            sqlx::query_as::<_, UserRecord>(r#"SELECT id, name, dob FROM users ORDER BY id ASC"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn update(
        &self,
        id: i32,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = $2,
                dob = $3
            WHERE id = $1
            RETURNING id, name, dob
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(date_of_birth)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i32,
    name: String,
    dob: NaiveDate,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            date_of_birth: value.dob,
        }
    }
}
