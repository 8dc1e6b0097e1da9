use std::sync::Arc;

use prompt_feedback::app::create_app;
use prompt_feedback::config;
use prompt_feedback::persistence::Persister;
use prompt_feedback::service::AnalysisService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing prompt feedback service...");

    let config = config::load_config().map_err(std::io::Error::other)?;
    log::info!(
        "model fallback chain: [{}], default api key configured: {}",
        config.models.join(", "),
        config.default_api_key.is_some()
    );

    let mut http_client = reqwest::Client::builder();
    if let Some(timeout) = config.provider_timeout {
        http_client = http_client.timeout(timeout);
    }
    let http_client = http_client.build().map_err(std::io::Error::other)?;

    let persister = Persister::connect(config.database_url.as_deref()).await;

    let analysis_service = Arc::new(AnalysisService::from_config(
        http_client,
        &config,
        persister,
    ));
    let port = config.port;
    let config = Arc::new(config);

    let server = actix_web::HttpServer::new(move || {
        create_app(analysis_service.clone(), config.clone())
    });

    log::info!("listening on 0.0.0.0:{}", port);
    server.bind(("0.0.0.0", port))?.run().await
}
