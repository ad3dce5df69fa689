use teloxide::prelude::*;

use crate::ai::config::AiConfig;
use crate::menu::PriceCatalog;
use crate::pipeline::Shop;

pub const SAMPLE_MENU: &str = "item,price\nBurger,5\nCoke,2\nFries,3.5\nChicken Wings,7.25\n";

pub fn sample_catalog() -> PriceCatalog {
    PriceCatalog::from_reader(SAMPLE_MENU.as_bytes()).expect("sample menu is valid")
}

pub fn sample_shop() -> Shop {
    Shop::new(sample_catalog(), "BDT")
}

/// Completion settings pointing at a mock server.
pub fn ai_config_for(server_uri: &str) -> AiConfig {
    AiConfig {
        api_key: "k".to_string(),
        model: "gemma2-9b-it".to_string(),
        chat_url: Some(format!("{server_uri}/openai/v1/chat/completions")),
    }
}

/// Chat completion response body whose first choice carries `content`.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "choices": [ { "message": { "role": "assistant", "content": content } } ]
    })
    .to_string()
}

/// Telegram bot talking to a mock server.
pub fn test_bot(server_uri: &str) -> Bot {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("failed to build http client");
    Bot::with_client("TEST", client)
        .set_api_url(reqwest::Url::parse(server_uri).expect("invalid mock server url"))
}

/// Private chat text message as Telegram would deliver it.
pub fn text_message(chat_id: i64, text: &str) -> Message {
    serde_json::from_value(serde_json::json!({
        "message_id": 1,
        "date": 0,
        "chat": { "id": chat_id, "type": "private" },
        "text": text
    }))
    .expect("valid message json")
}

/// Body Telegram returns for a successful `sendMessage`.
pub fn sent_message_body(chat_id: i64) -> String {
    serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 2,
            "date": 0,
            "chat": { "id": chat_id, "type": "private" },
            "text": "ok"
        }
    })
    .to_string()
}
