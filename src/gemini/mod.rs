pub mod prompt_client;

use crate::{
    config::GeminiConfig,
    error::{Result, VeoPromptError},
};

pub use prompt_client::{PromptClient, PromptModel};

#[derive(Clone)]
pub struct GeminiClient {
    prompt_client: PromptClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| VeoPromptError::ConfigError("no Gemini API key configured".into()))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.timeout_secs.unwrap_or(120),
            ))
            .build()
            .map_err(|e| VeoPromptError::ConfigError(e.to_string()))?;

        Ok(Self {
            prompt_client: PromptClient::new(http, api_key, config),
        })
    }

    pub fn prompts(&self) -> &PromptClient {
        &self.prompt_client
    }
}
