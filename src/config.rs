use std::env;
use url::Url;

use crate::error::ProviderError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: Url,
    pub temperature: Option<f32>,
}

impl ProviderConfig {
    /// Reads the provider settings from the process environment.
    ///
    /// The API key is mandatory: a missing or blank key is a configuration
    /// error so the process fails before sending unauthenticated requests.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_env_with_key(None)
    }

    /// Like [`ProviderConfig::from_env`], but an explicit key (from the
    /// command line) takes precedence over the environment.
    pub fn from_env_with_key(api_key: Option<String>) -> Result<Self, ProviderError> {
        Self::from_vars(api_key, |name| env::var(name).ok())
    }

    /// Builds the config from `var`, which resolves a variable name the way
    /// the process environment would.
    fn from_vars(
        api_key: Option<String>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key
            .or_else(|| var("API_KEY"))
            .or_else(|| var("GEMINI_API_KEY"))
            .ok_or_else(|| {
                ProviderError::Configuration(
                    "API key must be provided via --api-key or API_KEY env var".to_string(),
                )
            })?;

        let model = var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_url = var("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let temperature = var("GEMINI_TEMPERATURE").and_then(|t| t.parse().ok());

        Self::new(api_key, model, &api_url, temperature)
    }

    pub fn new(
        api_key: String,
        model: String,
        api_url: &str,
        temperature: Option<f32>,
    ) -> Result<Self, ProviderError> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(ProviderError::Configuration("API key is empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(ProviderError::Configuration("model name is empty".to_string()));
        }

        let api_url = Url::parse(api_url.trim_end_matches('/')).map_err(|e| {
            ProviderError::Configuration(format!("invalid API url '{}': {}", api_url, e))
        })?;

        Ok(Self {
            api_key,
            model,
            api_url,
            temperature,
        })
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.as_str().trim_end_matches('/'),
            self.model
        )
    }
}
