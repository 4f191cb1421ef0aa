use actix_web::{HttpServer, middleware, web};

use decks::config::AppConfig;
use decks::{db, errors, session};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let gateway = db::connect_gateway(&config)
        .await
        .expect("Failed to initialise storage");
    let secret_key = config.session_key();
    let static_dir = config.static_dir.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        decks::app(gateway.clone())
            .wrap(session::middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .service(actix_files::Files::new("/static", &static_dir))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async { errors::not_found_page() }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
