use crate::parse::parse_suggestion;
use crate::prompt::build_prompt;
use crate::suggestion::AiSuggestion;
use log::debug;
use serde_json::json;
use std::time::Duration;

/// Default OpenAI-compatible API base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("completion had no message content")]
    MissingContent,
}

/// Chat-completion client for the suggestion endpoint.
///
/// One client per process is plenty; `reqwest::Client` pools connections
/// internally and this type is cheap to clone.
#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl SuggestClient {
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, SuggestError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Raw completion text for a prompt.
    pub async fn complete(&self, prompt: &str) -> Result<String, SuggestError> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": 0.2,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&text)?;
        payload
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or(SuggestError::MissingContent)
    }

    /// Full pipeline: prompt the model with a transcript and parse the answer.
    pub async fn suggest(&self, transcript: &str) -> Result<AiSuggestion, SuggestError> {
        let content = self.complete(&build_prompt(transcript)).await?;
        debug!("completion content: {} bytes", content.len());
        Ok(parse_suggestion(&content))
    }
}
