use std::sync::Arc;

use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};
use dotenv::dotenv;

mod config;
mod controllers;
mod error;
mod models;
mod store;

use config::Config;
use store::ThoughtStore;

pub struct AppState {
    pub store: Arc<ThoughtStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing the in-memory thought store");
    let store = Arc::new(ThoughtStore::new());

    log::info!("Starting scatter-brain server on port {}", port);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
            }))
            .wrap(Logger::default())
            .configure(controllers::ping::config)
            .configure(controllers::thoughts::config)
            // Every non-API path falls through to the static asset handler.
            .service(Files::new("/", static_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
