pub mod user;

pub use user::{User, UserWithAge, validate_fields};
