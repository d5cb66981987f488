use std::io;
use std::sync::Arc;
use std::time::Duration;

use code_explainer::app::create_app;
use code_explainer::llm_client::GeminiClient;
use code_explainer::service::ExplanationService;
use code_explainer::{config, consts};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing code explainer service...");

    let config = config::load_config().map_err(io::Error::other)?;
    log::debug!("config: {:?}", config);

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
        .read_timeout(Duration::from_secs(config.read_timeout_secs))
        .build()
        .map_err(io::Error::other)?;

    let gemini_client = Arc::new(GeminiClient::new(
        http_client,
        &config.api_url,
        &config.api_key,
    ));
    let explanation_service = Arc::new(ExplanationService::new(gemini_client, config.sequence));

    let bind_addr = (config.host.clone(), config.port);
    log::info!("Listening on http://{}:{}/", bind_addr.0, bind_addr.1);

    let config = Arc::new(config);
    let app_factory = move || create_app(explanation_service.clone(), config.clone());

    actix_web::HttpServer::new(app_factory)
        .bind(bind_addr)?
        .run()
        .await
}
