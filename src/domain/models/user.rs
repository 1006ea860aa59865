use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// A user row as persisted. `age` is never stored; see [`UserWithAge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// A user with its derived age, as handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct UserWithAge {
    pub user: User,
    pub age: i32,
}

/// Field-level constraints shared by create and update.
pub fn validate_fields(
    name: &str,
    date_of_birth: NaiveDate,
    today: NaiveDate,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("name must not be empty".into()));
    }
    if date_of_birth > today {
        return Err(DomainError::Validation(
            "date_of_birth must not be in the future".into(),
        ));
    }
    Ok(())
}
