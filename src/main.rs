use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use notely::{handlers, Config, ConnectionProvider};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid configuration: {e}"),
        )
    })?;
    if config.database_url.is_none() {
        log::warn!("DATABASE_URL is not set, note requests will fail until it is");
    }
    log::info!("starting in {:?} mode on port {}", config.mode, config.port);

    let provider = web::Data::new(ConnectionProvider::from_config(&config));

    HttpServer::new(move || {
        App::new()
            .app_data(provider.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}
