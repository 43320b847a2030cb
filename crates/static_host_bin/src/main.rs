use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};
use std::process::exit;

mod config;
mod files;

use config::Config;
use files::StaticRoot;

const STATIC_HOST_PORT: u16 = 3000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Could not create config: {}", e);
            exit(1);
        }
    };

    info!(
        "Serving {} on http://localhost:{}",
        config.root.display(),
        STATIC_HOST_PORT
    );

    let root = web::Data::new(StaticRoot(config.root));

    HttpServer::new(move || {
        App::new()
            .app_data(root.clone())
            .default_service(web::to(files::serve_file))
            .wrap(Logger::default())
    })
    .bind(("0.0.0.0", STATIC_HOST_PORT))?
    .workers(config.workers)
    .run()
    .await
}
