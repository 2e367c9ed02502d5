mod config;
mod error;
mod services;
mod store;

use crate::config::AppConfig;
use crate::store::ProductStore;
use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let store = ProductStore::open(&config.db_path).map_err(|e| {
        error!("Cannot open database {}: {}", config.db_path.display(), e);
        io::Error::other(e)
    })?;
    match store.count_active() {
        Ok(count) => info!("Catalog holds {} active products", count),
        Err(e) => warn!("Could not count products: {}", e),
    }

    if !config.public_dir.is_dir() {
        warn!(
            "Static directory {} does not exist; /public will return 404",
            config.public_dir.display()
        );
    }

    info!("Server running at {}", config.url());

    let public_dir = config.public_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(store.clone()))
            .service(Files::new("/public", public_dir.clone()))
            .service(services::catalog::configure_routes())
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
