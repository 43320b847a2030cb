use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};
use std::process::exit;
use yahoo_api::api::YahooAPI;

mod config;
mod error;
mod routes;
mod utils;

use config::Config;

const PROXY_PORT: u16 = 3001;

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

    let yahoo_api = match YahooAPI::new(&config.upstream_url) {
        Ok(api) => web::Data::new(api),
        Err(e) => {
            error!("Could not create upstream client: {}", e);
            exit(1);
        }
    };

    info!("Proxy API on http://localhost:{}", PROXY_PORT);
    info!("Example: http://localhost:{}/api?symbol=BYDDF", PROXY_PORT);

    HttpServer::new(move || {
        App::new()
            .app_data(yahoo_api.clone())
            .wrap(routes::cors_headers())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
            .wrap(Logger::default())
    })
    .bind(("0.0.0.0", PROXY_PORT))?
    .workers(config.workers)
    .run()
    .await
}
