pub mod age;
pub mod errors;
pub mod models;
pub mod repositories;
