use log::{error, info};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::models::chat::ChatMessage;

/// Anthropic Messages API endpoint, overridable via ANTHROPIC_API_BASE_URL.
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com";

/// Anthropic API version header.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed system prompt: customs-broker persona and domain rules.
pub const SYSTEM_PROMPT: &str = r#"אתה מומחה בכיר למכס ישראלי של חברת RPA-PORT LTD.

📚 מקורות ידע:
- פקודת המכס (נוסח חדש)
- נוהל תש"ר 2024 (תהליך השחרור)
- צו תעריף המכס והפטורים ומס קנייה
- הסכמי סחר בינלאומיים (ארה"ב, האיחוד האירופי, EFTA, ועוד)
- דרישות משרדי ממשלה (בריאות, חקלאות, מכון התקנים)

🎯 יכולות:
- סיווג טובין לפי HS Code (10 ספרות)
- ניתוח הצהרות יבוא ויצוא
- חישוב מיסים (מכס, מע"מ, מס קנייה)
- זיהוי הטבות מהסכמי סחר
- בדיקת דרישות רישוי ותקינה

🗣️ שפה:
- מדבר עברית מקצועית
- יכול לענות גם באנגלית

📋 כללים:
1. תמיד לציין מקור המידע
2. להזהיר כשיש אי-ודאות
3. להפנות לייעוץ מקצועי בנושאים מורכבים

אתר: www.rpa-port.com
מייל: devrpa@rpa-port.co.il"#;

#[derive(Debug)]
pub enum ClaudeError {
    MissingApiKey,
    ReqwestError(reqwest::Error),
    StatusError(StatusCode, String),
    ParseError(String),
}

impl fmt::Display for ClaudeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaudeError::MissingApiKey => {
                write!(f, "ANTHROPIC_API_KEY environment variable not configured")
            }
            ClaudeError::ReqwestError(e) => write!(f, "Request error: {}", e),
            ClaudeError::StatusError(status, msg) => write!(f, "Status error ({}): {}", status, msg),
            ClaudeError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ClaudeError {}

impl From<reqwest::Error> for ClaudeError {
    fn from(err: reqwest::Error) -> Self {
        ClaudeError::ReqwestError(err)
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

pub struct ClaudeService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ClaudeService {
    /// Reads the credential from the environment at construction time. The
    /// process itself starts without it; a missing key is a request-scoped
    /// failure, never a startup one.
    pub fn new(model: String, timeout_secs: u64) -> Result<Self, ClaudeError> {
        let api_key = match std::env::var("ANTHROPIC_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                error!("ANTHROPIC_API_KEY is not set, cannot reach the Claude API");
                return Err(ClaudeError::MissingApiKey);
            }
        };

        let base_url = std::env::var("ANTHROPIC_API_BASE_URL")
            .unwrap_or_else(|_| ANTHROPIC_API_URL.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(ClaudeService {
            client,
            api_key,
            base_url,
            model,
        })
    }

    /// Sends one completion request and returns the first text segment of
    /// the response.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, ClaudeError> {
        let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));

        let request_body = MessagesRequest {
            model: &self.model,
            max_tokens,
            system: SYSTEM_PROMPT,
            messages,
        };

        info!("Sending completion request to {} (model: {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_message = response.text().await?;
            error!("Claude API request failed. Status: {}, Error: {}", status, error_message);
            return Err(ClaudeError::StatusError(status, error_message));
        }

        let completion: MessagesResponse = response.json().await?;

        completion
            .content
            .into_iter()
            .find(|block| block.block_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| {
                ClaudeError::ParseError("No text content in Claude response".to_string())
            })
    }
}
