use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::ai::common::{
    build_user_chat_body, parse_chat_content, send_chat_request, GROQ_CHAT_URL,
};
use crate::ai::prompts::order_extraction_prompt;
use crate::order::{Extraction, OrderLine};

/// Ask the completion model to turn an order text into order lines.
///
/// Exactly one request is sent. A reply that is not a JSON array of
/// `{item, quantity}` objects comes back as [`Extraction::Failed`]; transport
/// and API errors are returned as `Err`.
#[instrument(level = "trace", skip(api_key))]
pub async fn extract_order(
    api_key: &str,
    model: &str,
    order_text: &str,
    url: Option<&str>,
) -> Result<Extraction> {
    let url = url.unwrap_or(GROQ_CHAT_URL);
    let prompt = order_extraction_prompt(order_text);
    let body = build_user_chat_body(model, &prompt);

    let raw = send_chat_request(api_key, &body, url).await?;
    let content = parse_chat_content(&raw)?;
    Ok(parse_order_lines(&content))
}

/// Parse model output as a JSON array of order line objects.
///
/// Surrounding whitespace is ignored, nothing else is. Unknown fields are
/// allowed; a missing `item` or a quantity that is not a positive integer
/// fails the whole reply.
pub fn parse_order_lines(content: &str) -> Extraction {
    match try_parse_order_lines(content.trim()) {
        Ok(lines) => {
            debug!(count = lines.len(), "Parsed order lines");
            Extraction::Parsed(lines)
        }
        Err(err) => {
            warn!(error = %err, "Model output is not a valid order");
            Extraction::Failed {
                raw: content.to_string(),
                message: err.to_string(),
            }
        }
    }
}

fn try_parse_order_lines(content: &str) -> Result<Vec<OrderLine>> {
    // Objects first: serde would otherwise also accept `["burger", 2]` rows.
    let objects: Vec<Map<String, Value>> = serde_json::from_str(content)?;
    objects
        .into_iter()
        .enumerate()
        .map(|(idx, obj)| {
            let line: OrderLine = serde_json::from_value(Value::Object(obj))
                .map_err(|e| anyhow!("entry {idx}: {e}"))?;
            if line.quantity == Some(0) {
                return Err(anyhow!("entry {idx}: quantity must be at least 1"));
            }
            Ok(line)
        })
        .collect()
}
