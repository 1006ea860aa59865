use crate::{domain::models::UserWithAge, presentation::http::responses::UserDto};

pub fn map_user(entry: &UserWithAge) -> UserDto {
    UserDto {
        id: entry.user.id,
        name: entry.user.name.clone(),
        dob: entry.user.date_of_birth,
        age: entry.age,
    }
}
