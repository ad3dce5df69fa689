use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, trace, warn};

/// Groq's OpenAI-compatible chat completion endpoint.
pub const GROQ_CHAT_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Request body carrying a single user message.
pub fn build_user_chat_body(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ]
    })
}

/// Post a chat completion request and return the raw response body.
///
/// Non-success statuses, including rejected credentials, are errors.
#[instrument(level = "trace", skip(api_key, body))]
pub async fn send_chat_request(api_key: &str, body: &Value, url: &str) -> Result<String> {
    debug!(url, "sending chat completion request");

    let client = reqwest::Client::new();
    let resp = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "completion API error");
        return Err(anyhow!("completion API error {status}: {err_text}"));
    }

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "chat response body");
    trace!(raw = %raw, "chat response");
    Ok(raw)
}

/// Text of the first choice in a chat completion response.
///
/// A `null` or missing content field reads as an empty string; a response
/// with no choices at all is an error.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let choice = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing chat choice"))?;
    Ok(choice.message.content.unwrap_or_default())
}
