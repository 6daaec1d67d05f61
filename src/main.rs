use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;

use hotels_api::config::Config;
use hotels_api::db::{self, HotelStore, SqliteHotelStore};
use hotels_api::error::StartupError;
use hotels_api::services::{HotelLookupService, HotelService};
use hotels_api::{handlers, logging};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Initialize environment, config and logger
    dotenv().ok();
    let config = Config::parse();
    logging::init(&config);

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config).await?;

    log::info!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    let store: Arc<dyn HotelStore> = Arc::new(SqliteHotelStore::new(pool.clone()));
    let service: Arc<dyn HotelService> = Arc::new(HotelLookupService::new(store));
    let service_data = web::Data::from(service);

    log::info!(
        "Starting server at http://{}:{} ({})",
        config.host,
        config.port,
        config.env
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service_data.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    log::info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
