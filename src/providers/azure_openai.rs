use crate::config::ProviderConfig;
use crate::error::ExtractionError;
use crate::providers::{chat_messages, read_chat_completion, CompletionRequest, LlmProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

// Structured outputs need 2024-08-01-preview or later
const DEFAULT_API_VERSION: &str = "2024-10-21";

pub struct AzureOpenAIProvider {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    deployment_name: String,
    api_version: String,
    temperature: f32,
    max_tokens: Option<u32>,
}

impl AzureOpenAIProvider {
    /// Create a new Azure OpenAI provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Option<Duration>) -> Result<Self, ExtractionError> {
        let endpoint = config.endpoint.clone().ok_or_else(|| {
            ExtractionError::Provider("Azure OpenAI endpoint is required".to_string())
        })?;

        let deployment_name = config.deployment_name.clone().ok_or_else(|| {
            ExtractionError::Provider("Azure OpenAI deployment_name is required".to_string())
        })?;

        let api_version = config
            .api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(AzureOpenAIProvider {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint,
            deployment_name,
            api_version,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmProvider for AzureOpenAIProvider {
    fn provider_name(&self) -> &str {
        "azure_openai"
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, ExtractionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ExtractionError::MissingApiKey(self.provider_name().to_string()))?;

        // Azure OpenAI URL format:
        // https://{endpoint}/openai/deployments/{deployment-name}/chat/completions?api-version={api-version}
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        );

        let mut body = json!({
            "temperature": self.temperature,
            "response_format": request.schema.response_format(),
            "messages": chat_messages(request),
        });
        if let Some(max_tokens) = self.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        let response = self
            .client
            .post(&url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await?;

        read_chat_completion(response).await
    }
}
