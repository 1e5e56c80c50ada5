use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi; // ← needed for ApiDoc::openapi()
use utoipa_swagger_ui::SwaggerUi;

use hrms_lite::config::Config;
use hrms_lite::db::init_db;
use hrms_lite::docs::ApiDoc;
use hrms_lite::routes;
use hrms_lite::service::{Directory, Ledger};
use hrms_lite::store::PgStore;

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

    info!("Server starting...");

    let pool = init_db(&config).await?;

    // one store client shared by both services for the life of the process
    let store = Arc::new(PgStore::new(pool.clone()));
    let directory = Directory::new(store.clone());
    let ledger = Ledger::new(store, directory.clone());

    let limiter = routes::build_limiter(config.rate_per_min);
    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    info!(addr = %server_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}") // ← important: wildcard {_:.*} to match JS/CSS files
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::new(directory.clone()))
            .app_data(Data::new(ledger.clone()))
            .configure(|cfg| routes::configure(cfg, &config_data, &limiter))
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    pool.close().await;
    info!("Server stopped, database connections closed");

    Ok(())
}
