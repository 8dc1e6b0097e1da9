use std::time::Duration;

use crate::consts;
use crate::errors::AnalyzerError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub default_api_key: Option<String>,
    pub api_base: String,
    pub models: Vec<String>,
    pub provider_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: consts::DEFAULT_PORT,
            database_url: None,
            default_api_key: None,
            api_base: consts::DEFAULT_API_BASE.to_string(),
            models: consts::DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            provider_timeout: None,
        }
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, AnalyzerError>;
}

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads configuration from process environment variables.
pub struct EnvConfigLoader {
    lookup: Lookup,
}

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, AnalyzerError> {
        let mut config = Config::default();

        if let Some(port) = self.var("PORT") {
            config.port = port.parse()?;
        }
        config.database_url = self.var("DATABASE_URL");
        config.default_api_key = self.var("GEMINI_API_KEY");
        if let Some(api_base) = self.var("GEMINI_API_BASE") {
            config.api_base = api_base.trim_end_matches('/').to_string();
        }
        if let Some(models) = self.var("GEMINI_MODELS") {
            config.models = models
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .collect();
            if config.models.is_empty() {
                return Err(AnalyzerError::ConfigError(
                    "GEMINI_MODELS must name at least one model".to_string(),
                ));
            }
        }
        if let Some(secs) = self.var("PROVIDER_TIMEOUT_SECS") {
            config.provider_timeout = Some(Duration::from_secs(secs.parse()?));
        }

        Ok(config)
    }
}

pub fn load_config() -> Result<Config, AnalyzerError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
