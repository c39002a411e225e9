use actix_web::{App, HttpServer, middleware, web};

use mahallu_connect::config::AppConfig;
use mahallu_connect::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let source = db::connect_source(&config.source).map_err(std::io::Error::other)?;

    log::info!("Starting server at http://{}", config.bind_addr);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(source.clone()))
            // Static files
            .service(actix_files::Files::new("/static", &static_dir))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
