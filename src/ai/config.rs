use std::env;

/// Default chat model, served by Groq.
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";

#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    /// Override for the chat completion endpoint.
    pub chat_url: Option<String>,
}

impl AiConfig {
    /// Read the completion settings; `None` when `GROQ_API_KEY` is unset.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GROQ_API_KEY").ok()?;
        Some(Self {
            api_key,
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            chat_url: env::var("GROQ_CHAT_URL").ok(),
        })
    }
}
