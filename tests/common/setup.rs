use std::sync::Arc;

use reqwest::Client;

use prompt_feedback::config::Config;
use prompt_feedback::persistence::{Persister, RecordStore};
use prompt_feedback::service::AnalysisService;

pub const MODELS: [&str; 3] = ["model-a", "model-b", "model-c"];

pub fn create_test_config(api_base: String) -> Config {
    Config {
        port: 0,
        database_url: None,
        default_api_key: None,
        api_base,
        models: MODELS.iter().map(|m| m.to_string()).collect(),
        provider_timeout: None,
    }
}

pub fn create_service(config: &Config, store: Option<Arc<dyn RecordStore>>) -> AnalysisService {
    AnalysisService::from_config(Client::new(), config, Persister::new(store))
}

pub fn create_test_app_components(
    config: Config,
    store: Option<Arc<dyn RecordStore>>,
) -> (Arc<Config>, Arc<AnalysisService>) {
    let service = Arc::new(create_service(&config, store));
    (Arc::new(config), service)
}
