pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::content;
pub use modules::media;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::GoogleIdentityProvider;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::IdentityProvider;
use crate::auth::application::use_cases::{
    admin_sign_in::{AdminSignInUseCase, IAdminSignInUseCase},
    admin_sign_out::{AdminSignOutUseCase, IAdminSignOutUseCase},
};
use crate::config::{AppConfig, StoreBackend};
use crate::content::adapter::outgoing::{DocumentStorePostgres, InMemoryDocumentStore};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::service::{ContentRepository, PortfolioMaintenance};
use crate::media::adapter::outgoing::HttpImageLoader;
use crate::media::application::ports::incoming::use_cases::ImagePlaceholderUseCase;
use crate::media::application::service::{ColorSampler, ImagePlaceholderService};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use anyhow::{anyhow, Context};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub admin_sign_in_use_case: Arc<dyn IAdminSignInUseCase + Send + Sync>,
    pub admin_sign_out_use_case: Arc<dyn IAdminSignOutUseCase + Send + Sync>,
    pub image_placeholder_use_case: Arc<dyn ImagePlaceholderUseCase + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    let (json_layer, text_layer) = if json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();
}

#[cfg(not(tarpaulin_include))]
fn load_env() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match config.document_store {
        StoreBackend::Memory => {
            warn!("Using the in-memory document store, content is lost on restart");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let db_url = config
                .database_url
                .clone()
                .context("DATABASE_URL is not set")?;

            let mut opt = ConnectOptions::new(db_url);
            opt.max_connections(50)
                .min_connections(10)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .context("Failed to connect to database")?;
            Migrator::up(&conn, None)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(DocumentStorePostgres::new(Arc::new(conn))))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    info!("Starting application...");

    let config = AppConfig::load()?;
    let jwt_service = Arc::new(JwtTokenService::new(JwtConfig::from_env()?));
    let store = connect_store(&config).await?;

    // Content
    let content_repository = Arc::new(ContentRepository::new(Arc::clone(&store)));

    // Auth
    let identity_provider: Arc<dyn IdentityProvider> = Arc::new(GoogleIdentityProvider::new(
        config.identity_provider_timeout,
    )?);
    let admin_sign_in_use_case = AdminSignInUseCase::new(
        Arc::clone(&identity_provider),
        content_repository.clone(),
        jwt_service.clone(),
    );
    let admin_sign_out_use_case = AdminSignOutUseCase::new(identity_provider);

    // Media
    let image_loader = HttpImageLoader::new(
        &config.public_dir,
        config.image_fetch_timeout,
        config.image_max_bytes,
    );
    let image_placeholder_use_case =
        ImagePlaceholderService::new(ColorSampler::new(Arc::new(image_loader)));

    let state = AppState {
        content: ContentUseCases {
            read: content_repository.clone(),
            manage: content_repository,
        },
        admin_sign_in_use_case: Arc::new(admin_sign_in_use_case),
        admin_sign_out_use_case: Arc::new(admin_sign_out_use_case),
        image_placeholder_use_case: Arc::new(image_placeholder_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = jwt_service;
    let openapi = ApiDoc::openapi();

    let server_url = config.server_url();
    info!(%server_url, store = ?config.document_store, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public portfolio
    cfg.service(crate::content::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_section_items_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_objective_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    // Admin
    cfg.service(crate::content::adapter::incoming::web::routes::admin_get_portfolio_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::admin_get_section_items_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_item_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::set_visibility_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_item_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_item_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_objective_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_skills_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_sign_in_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::admin_sign_out_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::get_placeholder_handler);
}

#[derive(Debug, Clone, Copy)]
enum MaintenanceCommand {
    Seed,
    Clear,
}

/// One-shot writes against the configured store, run instead of the server.
#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn run_maintenance(command: MaintenanceCommand) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let store = connect_store(&config).await?;
    let maintenance = PortfolioMaintenance::new(store);

    match command {
        MaintenanceCommand::Seed => {
            let allowed_email = config
                .allowed_email
                .context("ALLOWED_EMAIL must be set to seed the admin allowlist")?;
            maintenance.seed(&allowed_email).await?;
        }
        MaintenanceCommand::Clear => {
            let deleted = maintenance.clear().await?;
            info!(deleted, "Clear finished");
        }
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    load_env();
    init_tracing();

    let result = match std::env::args().nth(1).as_deref() {
        None | Some("serve") => start(),
        Some("seed") => run_maintenance(MaintenanceCommand::Seed),
        Some("clear") => run_maintenance(MaintenanceCommand::Clear),
        Some(other) => Err(anyhow!(
            "unknown command {other:?}, expected serve, seed or clear"
        )),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
