use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::SummaryProvider;
use crate::error::{DashError, DashResult};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const PROMPT_PREFIX: &str = concat!(
    "你是一个资深的跨境供应链管理专家。",
    "请根据以下业务数据，提供一段简洁有力（不超过150字）的管理小结，",
    "包含核心成就、风险预警和建议动作。数据：",
);
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

#[derive(Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for SummaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SummaryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_key: non_blank("API_KEY").or_else(|| non_blank("GEMINI_API_KEY")),
            model: non_blank("SUPPLY_DASH_SUMMARY_MODEL").unwrap_or(defaults.model),
            endpoint: non_blank("SUPPLY_DASH_SUMMARY_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout: non_blank("SUPPLY_DASH_SUMMARY_TIMEOUT_SECS")
                .and_then(|value| value.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

pub fn generate_content_url(endpoint: &str, model: &str) -> DashResult<Url> {
    if model.is_empty() || model.contains('/') {
        return Err(DashError::InvalidArgument(format!(
            "invalid summary model '{model}'"
        )));
    }
    let mut base = Url::parse(endpoint)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(DashError::InvalidArgument(format!(
            "summary endpoint '{endpoint}' must use http or https"
        )));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join(&format!("v1beta/models/{model}:generateContent"))?)
}

pub fn build_prompt(context: &str) -> String {
    format!("{PROMPT_PREFIX}{context}")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    url: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &SummaryConfig) -> DashResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| DashError::InvalidArgument("summary api key is not set".to_string()))?;
        let url = generate_content_url(&config.endpoint, &config.model)?;
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url,
            api_key,
        })
    }
}

#[async_trait]
impl SummaryProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, context: &str) -> DashResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(context)),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        };

        debug!(url = %self.url, context_chars = context.chars().count(), "requesting summary");
        let response = self
            .client
            .post(self.url.clone())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashError::Provider(format!(
                "gemini returned HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed
            .text()
            .ok_or_else(|| DashError::Provider("gemini response contained no text".to_string()))
    }
}
