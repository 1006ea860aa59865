use std::io::Error;
use std::sync::Arc;

use poem::{EndpointExt, Route, Server, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing_subscriber::EnvFilter;

use crate::{
    application::usecases::{
        create_user::CreateUserUseCase, delete_user::DeleteUserUseCase, get_user::GetUserUseCase,
        list_users::ListUsersUseCase, update_user::UpdateUserUseCase,
    },
    config::Config,
    infrastructure::repositories::postgres::PostgresUserRepository,
    presentation::http::endpoints::{
        health::HealthEndpoints,
        root::ApiState,
        users::UserEndpoints,
    },
};

mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .map_err(Error::other)?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(Error::other)?;

    let repo = PostgresUserRepository::new(pool);
    let state = Arc::new(ApiState {
        create_user: Arc::new(CreateUserUseCase::new(repo.clone())),
        get_user: Arc::new(GetUserUseCase::new(repo.clone())),
        list_users: Arc::new(ListUsersUseCase::new(repo.clone())),
        update_user: Arc::new(UpdateUserUseCase::new(repo.clone())),
        delete_user: Arc::new(DeleteUserUseCase::new(repo)),
    });

    let server_url = format!("http://localhost:{}", config.port);
    tracing::info!("Starting server at {}", server_url);

    let api_service = OpenApiService::new(
        (HealthEndpoints, UserEndpoints::new(state)),
        "Users API",
        "0.1.0",
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let app = Route::new()
        .nest("/docs", ui)
        .nest("/", api_service)
        .with(Tracing);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
