use customs_ai::{
    config::Settings,
    handlers::{agreements_handler, chat_handler, classify_handler, health_handler, info_handler},
    utils::logging::{init_logging_with_config, LogConfig},
    AppState,
};

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::RwLock;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Make dotenv optional since env vars can come from the container
    dotenv().ok();

    let settings = Settings::new().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to load settings: {}", e),
        )
    })?;

    let log_config = LogConfig::new(&settings.log_level, &settings.log_level);
    init_logging_with_config(log_config)?;

    info!("Starting RPA-PORT Customs AI gateway...");

    let bind_address = format!("{}:{}", settings.bind_address, settings.port);
    let settings = Arc::new(RwLock::new(settings));
    let app_state_data = web::Data::new(AppState::new(settings));

    info!("Starting HTTP server on {}", bind_address);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600)
            .supports_credentials();

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(app_state_data.clone())
            .route("/", web::get().to(info_handler::info))
            .service(
                web::scope("/api")
                    .configure(chat_handler::config)
                    .configure(classify_handler::config)
                    .configure(agreements_handler::config),
            )
            .service(web::scope("/health").configure(health_handler::config))
    })
    .bind(&bind_address)?
    .run();

    let server_handle = server.handle();

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM signal");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT signal");
            }
        }
        info!("Initiating graceful shutdown");
        server_handle.stop(true).await;
    });

    server.await?;

    info!("HTTP server stopped");
    Ok(())
}
