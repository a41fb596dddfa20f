use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::config::AssistantConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// A chat completion provider. Returns `None` when the model answered
/// without any content.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>>;
}

/// Client for OpenAI compatible `chat/completions` endpoints, Groq by default.
pub struct GroqClient {
    http: reqwest::Client,
    config: AssistantConfig,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqClient {
    pub fn new(http: reqwest::Client, config: AssistantConfig) -> Self {
        Self { http, config }
    }
}

fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[async_trait]
impl ChatCompletion for GroqClient {
    #[tracing::instrument(skip_all, fields(model = %self.config.model))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>> {
        let body = CompletionRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let res = self
            .http
            .post(completions_url(&self.config.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .context("error sending chat completion request")?;

        let status = res.status();
        if !status.is_success() {
            let text = res.text().await.unwrap_or_default();
            bail!("chat completion failed: {status} {text}");
        }

        let out: CompletionResponse = res
            .json()
            .await
            .context("error parsing chat completion response")?;

        Ok(first_content(out))
    }
}

fn first_content(res: CompletionResponse) -> Option<String> {
    res.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
}
