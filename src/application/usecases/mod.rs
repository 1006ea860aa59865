pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;
pub mod update_user;

use chrono::Utc;

use crate::domain::{
    age::age_at,
    models::{User, UserWithAge},
};

/// Derived fields are attached here, against the wall clock, so two reads of
/// the same row at different times may report different ages.
pub(crate) fn with_current_age(user: User) -> UserWithAge {
    let age = age_at(user.date_of_birth, Utc::now().date_naive());
    UserWithAge { user, age }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{Months, NaiveDate, Utc};

    use super::create_user::{CreateUserRequest, CreateUserUseCase};
    use super::delete_user::DeleteUserUseCase;
    use super::get_user::GetUserUseCase;
    use super::list_users::ListUsersUseCase;
    use super::update_user::{UpdateUserRequest, UpdateUserUseCase};
    use crate::domain::errors::DomainError;
    use crate::domain::repositories::UserRepository;
    use crate::infrastructure::repositories::in_memory::InMemoryUserRepository;

    fn repo() -> Arc<InMemoryUserRepository> {
        Arc::new(InMemoryUserRepository::new())
    }

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
    }

    #[tokio::test]
    async fn create_then_get_roundtrips_with_fresh_age() {
        let repo = repo();
        let create = CreateUserUseCase::new(repo.clone());
        let get = GetUserUseCase::new(repo.clone());

        // 30 whole years before today, so the derived age is exactly 30.
        let thirty_years_ago = Utc::now().date_naive() - Months::new(360);
        let created = create
            .execute(CreateUserRequest {
                name: "Ada".into(),
                date_of_birth: thirty_years_ago,
            })
            .await
            .unwrap();

        let fetched = get.execute(created.user.id).await.unwrap();
        assert_eq!(fetched.user, created.user);
        assert_eq!(fetched.user.name, "Ada");
        assert_eq!(fetched.user.date_of_birth, thirty_years_ago);
        assert_eq!(fetched.age, 30);
    }

    #[tokio::test]
    async fn get_on_absent_id_is_not_found() {
        let get = GetUserUseCase::new(repo());
        let err = get.execute(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = repo();
        let create = CreateUserUseCase::new(repo.clone());
        let delete = DeleteUserUseCase::new(repo.clone());
        let get = GetUserUseCase::new(repo.clone());

        let created = create
            .execute(CreateUserRequest {
                name: "Ada".into(),
                date_of_birth: dob(),
            })
            .await
            .unwrap();

        delete.execute(created.user.id).await.unwrap();
        let err = get.execute(created.user.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_on_absent_id_is_not_found() {
        let delete = DeleteUserUseCase::new(repo());
        let err = delete.execute(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_with_empty_name_fails_without_touching_the_store() {
        let repo = repo();
        let create = CreateUserUseCase::new(repo.clone());

        for name in ["", "   "] {
            let err = create
                .execute(CreateUserRequest {
                    name: name.into(),
                    date_of_birth: dob(),
                })
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_with_future_date_of_birth_is_rejected() {
        let create = CreateUserUseCase::new(repo());
        let tomorrow = Utc::now().date_naive().succ_opt().unwrap();
        let err = create
            .execute(CreateUserRequest {
                name: "Ada".into(),
                date_of_birth: tomorrow,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn list_on_empty_store_is_an_empty_sequence() {
        let list = ListUsersUseCase::new(repo());
        assert!(list.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_overwrites_name_and_date_of_birth() {
        let repo = repo();
        let create = CreateUserUseCase::new(repo.clone());
        let update = UpdateUserUseCase::new(repo.clone());

        let created = create
            .execute(CreateUserRequest {
                name: "Ada".into(),
                date_of_birth: dob(),
            })
            .await
            .unwrap();

        let new_dob = NaiveDate::from_ymd_opt(1991, 1, 2).unwrap();
        let updated = update
            .execute(UpdateUserRequest {
                id: created.user.id,
                name: "Grace".into(),
                date_of_birth: new_dob,
            })
            .await
            .unwrap();

        assert_eq!(updated.user.id, created.user.id);
        assert_eq!(updated.user.name, "Grace");
        assert_eq!(updated.user.date_of_birth, new_dob);
    }

    #[tokio::test]
    async fn update_on_absent_id_fails_without_touching_the_store() {
        let repo = repo();
        let update = UpdateUserUseCase::new(repo.clone());
        let err = update
            .execute(UpdateUserRequest {
                id: 999,
                name: "Grace".into(),
                date_of_birth: dob(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
