use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use infinite_scroll::catalog::Catalog;
use infinite_scroll::cli::{commands::{Cli, Commands}, run_cli};
use infinite_scroll::config::AppConfig;
use infinite_scroll::db;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Serve) {
        run_cli(cli.command, cli.config);
        return Ok(());
    }

    info!("Starting Infinite Scroll server...");

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Chat keeps working without a database; see db::open_store
    let store = db::open_store(&config.database);
    let catalog = web::Data::new(Catalog::default());

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Server listening on {}:{} (store: {})", host, port, store.name());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(catalog.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(infinite_scroll::api::routes::configure)
            .configure(infinite_scroll::api::routes_diagnostics::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
