mod azure_openai;
mod factory;
mod open_ai;
mod prompt;

pub use azure_openai::AzureOpenAIProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::RECIPE_EXTRACTION_PROMPT;

use async_trait::async_trait;
use log::debug;
use reqwest::Response;
use serde_json::Value;

use crate::error::ExtractionError;
use crate::schema::OutputSchema;

/// One structured-output completion: a system instruction, the user's text and
/// the schema the answer must follow.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub user: &'a str,
    pub schema: &'a OutputSchema,
}

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "azure_openai")
    fn provider_name(&self) -> &str;

    /// Send the request and return the raw message content, which should be
    /// a JSON document matching `request.schema`.
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, ExtractionError>;
}

/// Chat messages shared by the OpenAI-compatible providers
fn chat_messages(request: &CompletionRequest<'_>) -> Value {
    serde_json::json!([
        {"role": "system", "content": request.system},
        {"role": "user", "content": request.user}
    ])
}

/// Turn a chat completion HTTP response into its message content.
async fn read_chat_completion(response: Response) -> Result<String, ExtractionError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ExtractionError::Service {
            status: status.as_u16(),
            body,
        });
    }

    let response_body: Value = response.json().await?;
    debug!("{:?}", response_body);
    message_content(&response_body)
}

fn message_content(response_body: &Value) -> Result<String, ExtractionError> {
    let message = &response_body["choices"][0]["message"];
    if let Some(refusal) = message["refusal"].as_str() {
        return Err(ExtractionError::Refused(refusal.to_string()));
    }

    message["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ExtractionError::InvalidResponse(
                "Failed to extract content from response".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_content() {
        let body = json!({"choices": [{"message": {"content": "{}", "refusal": null}}]});
        assert_eq!(message_content(&body).unwrap(), "{}");
    }

    #[test]
    fn test_message_refusal() {
        let body = json!({"choices": [{"message": {"content": null, "refusal": "Désolé"}}]});
        match message_content(&body) {
            Err(ExtractionError::Refused(reason)) => assert_eq!(reason, "Désolé"),
            other => panic!("expected refusal, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_choices() {
        let body = json!({"id": "chatcmpl-1"});
        assert!(matches!(
            message_content(&body),
            Err(ExtractionError::InvalidResponse(_))
        ));
    }
}
