use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use dsa_pathfinder::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

fn spawn_session_eviction(state: AppState) {
    let max_idle = chrono::Duration::minutes(state.config.session_idle_minutes);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(EVICTION_INTERVAL);
        loop {
            interval.tick().await;
            if let Err(e) = state.sessions.evict_idle(max_idle).await {
                log::error!("Session eviction failed: {}", e);
            }
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    log::info!(
        "Generator: {} (configured: {})",
        config.groq_model,
        config.api_configured()
    );

    let state = AppState::new(config);
    spawn_session_eviction(state.clone());

    log::info!("Starting HTTP server on http://{}:{}", host, port);
    log::info!("Health check: http://{}:{}/health", host, port);

    let data = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
