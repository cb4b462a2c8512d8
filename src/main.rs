//! `drink-tally` server binary.
//!
//! Startup sequence: load and validate configuration, initialize tracing,
//! connect to PostgreSQL, wire the application handlers, then serve the API.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use drink_tally::adapters::auth::{
    DirectoryClient, DirectoryConfig, JwtConfig, JwtSessionValidator,
};
use drink_tally::adapters::http::middleware::{auth_middleware, AuthState};
use drink_tally::adapters::http::{
    account_routes, admin_routes, tally_routes, AccountHandlers, AdminHandlers, TallyHandlers,
};
use drink_tally::adapters::postgres::{PostgresEntryRepository, PostgresProfileRepository};
use drink_tally::application::handlers::tally::{
    GetOverviewHandler, GetTallyHandler, RecordEntryHandler, RemoveEntryHandler,
    ResetEntriesHandler,
};
use drink_tally::application::handlers::user::{
    ChangeRoleHandler, DeleteUserHandler, InviteUserHandler, ListProfilesHandler,
    SetPasswordHandler,
};
use drink_tally::config::AppConfig;
use drink_tally::ports::{AuthDirectory, EntryRepository, ProfileRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting drink-tally"
    );

    // Database pool
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Adapters
    let entries: Arc<dyn EntryRepository> = Arc::new(PostgresEntryRepository::new(pool.clone()));
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));
    let directory: Arc<dyn AuthDirectory> = Arc::new(DirectoryClient::new(
        DirectoryConfig::new(
            config.auth.directory_url.clone(),
            config.auth.service_role_key.clone(),
        )
        .with_timeout(Duration::from_secs(config.auth.directory_timeout_secs)),
    )?);
    let validator: AuthState = Arc::new(JwtSessionValidator::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
    )));

    // Application handlers
    let tally_handlers = TallyHandlers::new(
        Arc::new(RecordEntryHandler::new(entries.clone())),
        Arc::new(GetTallyHandler::new(entries.clone())),
    );
    let admin_handlers = AdminHandlers::new(
        Arc::new(GetOverviewHandler::new(profiles.clone(), entries.clone())),
        Arc::new(RemoveEntryHandler::new(profiles.clone(), entries.clone())),
        Arc::new(ResetEntriesHandler::new(profiles.clone(), entries.clone())),
        Arc::new(ListProfilesHandler::new(profiles.clone())),
        Arc::new(InviteUserHandler::new(profiles.clone(), directory.clone())),
        Arc::new(DeleteUserHandler::new(
            profiles.clone(),
            entries.clone(),
            directory.clone(),
        )),
        Arc::new(ChangeRoleHandler::new(profiles.clone())),
    );
    let account_handlers = AccountHandlers::new(Arc::new(SetPasswordHandler::new(directory)));

    // Router
    let api = Router::new()
        .nest("/api/tally", tally_routes(tally_handlers))
        .nest("/api/admin", admin_routes(admin_handlers))
        .nest("/api/account", account_routes(account_handlers))
        .layer(middleware::from_fn_with_state(validator, auth_middleware));

    let app = Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let addr = config.server.socket_addr()?;
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
