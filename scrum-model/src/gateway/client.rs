//! Gateway client implementation.

use super::config::GatewayConfig;
use super::convert::{self, ChatCompletionRequest, ChatCompletionResponse, Message};
use crate::{prompt, response};
use async_trait::async_trait;
use reqwest::Client;
use scrum_core::{
    DocumentAudit, Result, ScrumError, ScrumPlan, SelectedFix, SpecAnalyzer, TeamMember,
};

/// Client for the hosted OpenAI-compatible chat completion gateway.
///
/// Each operation is a single POST with no retries; failures are categorized
/// by upstream status (429 rate limited, 402 credits exhausted, anything
/// else a generic gateway error).
///
/// # Example
///
/// ```rust,ignore
/// use scrum_model::gateway::{GatewayClient, GatewayConfig};
///
/// let client = GatewayClient::new(GatewayConfig::new(
///     std::env::var("AI_GATEWAY_API_KEY").unwrap()
/// ))?;
/// ```
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client.
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ScrumError::Gateway(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Build the API URL for chat completions.
    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.effective_base_url().trim_end_matches('/')
        )
    }

    /// Issue one chat completion call and return the assistant text.
    async fn chat(&self, messages: Vec<Message>) -> Result<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.api_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ScrumError::Gateway(format!("gateway request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                429 => ScrumError::RateLimited(status.to_string()),
                402 => ScrumError::CreditsExhausted(status.to_string()),
                _ => {
                    tracing::error!(%status, body = %body, "gateway call failed");
                    ScrumError::Gateway(format!("gateway error ({})", status))
                }
            });
        }

        let reply: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ScrumError::Gateway(format!("failed to read gateway reply: {}", e)))?;

        if let Some(usage) = &reply.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "gateway usage"
            );
        }

        convert::first_content(&reply)
            .map(str::to_string)
            .ok_or_else(|| ScrumError::Gateway("gateway reply had no content".to_string()))
    }
}

#[async_trait]
impl SpecAnalyzer for GatewayClient {
    async fn generate_plan(
        &self,
        document: &str,
        team: &[TeamMember],
        sprint_duration_weeks: u32,
    ) -> Result<ScrumPlan> {
        let messages = vec![
            Message::system(prompt::plan_system_prompt(team, sprint_duration_weeks)),
            Message::user(prompt::plan_user_message(document)),
        ];
        let content = self.chat(messages).await?;
        response::parse_plan(&content)
    }

    async fn validate_document(&self, document: &str) -> Result<DocumentAudit> {
        let messages = vec![
            Message::system(prompt::audit_system_prompt()),
            Message::user(prompt::audit_user_message(document)),
        ];
        let content = self.chat(messages).await?;
        response::parse_audit(&content)
    }

    async fn apply_fixes(&self, document: &str, fixes: &[SelectedFix]) -> Result<String> {
        let messages = vec![
            Message::system(prompt::fix_system_prompt()),
            Message::user(prompt::fix_user_message(document, fixes)),
        ];
        let content = self.chat(messages).await?;
        Ok(response::strip_markdown_fences(&content))
    }
}
