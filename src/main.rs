use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use chrono::Utc;
use dotenvy::dotenv;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod seed;
mod service;
mod store;
mod utils;

use config::Config;
use db::init_db;

use crate::docs::ApiDoc;
use crate::service::HrService;
use crate::store::{MySqlStore, Store};
use tracing::{info, warn};
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let store = match &config.database_url {
        Some(url) => Store::MySql(MySqlStore::new(init_db(url).await?)),
        None => {
            warn!("DATABASE_URL not set, records live in memory and are lost on shutdown");
            Store::in_memory()
        }
    };
    let service = Data::new(HrService::new(store));
    info!(backend = service.backend(), "Store ready");

    if config.seed_demo_data {
        seed::seed_demo_data(&service, Utc::now().date_naive()).await?;
    }

    let limiter = routes::rate_limiter(config.rate_limit_per_min);
    if limiter.is_none() {
        warn!("Rate limiting disabled");
    }
    let api_prefix = config.api_prefix.clone();
    let allowed_origins = config.allowed_origins.clone();
    let service_for_app = service.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&allowed_origins))
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(service_for_app.clone())
            .configure(|cfg| routes::configure(cfg, &api_prefix, limiter.as_ref()))
    })
    .bind(config.server_addr.as_str())?
    .run()
    .await?;

    info!(backend = service.backend(), "Server stopped, releasing store");
    Ok(())
}
