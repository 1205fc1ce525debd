use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use portfolio_gateway::{
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if !config.data_source_configured() {
        tracing::warn!("Data source not configured, project reads will serve the static list");
    }
    if !config.email_configured() {
        tracing::warn!("Email provider not configured, contact relay runs degraded outside production");
    }

    let server_addr = format!("{}:{}", config.host, config.port);
    let worker_count = config.worker_count;
    let cors_origins = config.cors_origins();

    let app_state = web::Data::new(AppState::new(config));

    tracing::info!(
        "🚀 Starting Portfolio Gateway v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(build_cors(&cors_origins))
            .configure(configure_routes)
    })
    .workers(worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default().allow_any_method().allow_any_header();
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}
