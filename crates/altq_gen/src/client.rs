use std::fmt;

use altq_core::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Seam between the post generator and the hosted completion endpoint.
/// Production uses [`OpenRouterModel`]; tests substitute a canned model.
#[async_trait]
pub trait CompletionModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Send one user prompt and return the completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Chat-completions client for the OpenRouter API.
pub struct OpenRouterModel {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterModel {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

impl fmt::Debug for OpenRouterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRouterModel")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl CompletionModel for OpenRouterModel {
    fn name(&self) -> &str {
        "OpenRouter"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        // A reachable endpoint that answers badly is a generation failure for
        // this article, not a transport error.
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Generation(format!(
                "completion endpoint returned status {}",
                status
            )));
        }

        let body = response.text().await?;
        extract_content(&body)
    }
}

fn extract_content(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::Generation(format!("malformed completion response: {}", e)))?;
    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| Error::Generation("completion response contained no choices".to_string()))
}
