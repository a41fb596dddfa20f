use anyhow::Context;
use dotenv::dotenv;
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ASSISTANT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_ASSISTANT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_ASSISTANT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_ASSISTANT_MAX_TOKENS: u32 = 2048;

#[derive(Deserialize, Default)]
pub struct EnvironmentVariables {
    pub database_url: Option<String>,
    pub front_base_url: String,
    pub port: Option<u16>,

    // chat completion provider
    pub groq_api_key: Option<String>,
    pub groq_base_url: Option<String>,
    pub assistant_model: Option<String>,
    pub assistant_temperature: Option<f32>,
    pub assistant_max_tokens: Option<u32>,

    pub otel_enabled: Option<bool>,
}

pub struct Config {
    pub database_url: Option<String>,
    pub front_base_url: String,
    pub port: u16,

    /// None when no api key is configured; the assistant endpoint is then disabled.
    pub assistant: Option<AssistantConfig>,

    pub otel_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Config {
    pub fn new() -> Result<Self, anyhow::Error> {
        let _ = dotenv().map_err(|err| warn!("error loading .env: {:?}", err));

        let envs =
            envy::from_env::<EnvironmentVariables>().context("invalid environment variables")?;

        return Ok(Config::from_envs(envs));
    }

    pub fn from_envs(envs: EnvironmentVariables) -> Self {
        let assistant = envs
            .groq_api_key
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| AssistantConfig {
                api_key,
                base_url: envs
                    .groq_base_url
                    .unwrap_or_else(|| DEFAULT_ASSISTANT_BASE_URL.to_owned()),
                model: envs
                    .assistant_model
                    .unwrap_or_else(|| DEFAULT_ASSISTANT_MODEL.to_owned()),
                temperature: envs
                    .assistant_temperature
                    .unwrap_or(DEFAULT_ASSISTANT_TEMPERATURE),
                max_tokens: envs
                    .assistant_max_tokens
                    .unwrap_or(DEFAULT_ASSISTANT_MAX_TOKENS),
            });

        return Config {
            database_url: envs.database_url.filter(|url| !url.is_empty()),
            front_base_url: envs.front_base_url,
            port: envs.port.unwrap_or(DEFAULT_PORT),
            assistant,
            otel_enabled: envs.otel_enabled.unwrap_or(false),
        };
    }
}
