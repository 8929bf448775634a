use actix_web::{web, App, HttpServer};
use gallery_backend::config::AppConfig;
use gallery_backend::middleware::{
    cors_middleware, RequestTrace, StructuredLogger, TraceSpan,
};
use gallery_backend::routes;
use gallery_backend::state::app_state::AppState;
use gallery_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration is read from the environment exactly once, here.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::from_config(&config);
    let codec = app_state.codec.clone();
    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    info!(
        host = %config.host,
        port = config.port,
        runtime_env = ?config.runtime_env,
        token_ttl_secs = config.token_ttl_secs,
        "starting gallery backend"
    );

    HttpServer::new(move || {
        let codec = codec.clone();
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| routes::configure(cfg, &codec))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
