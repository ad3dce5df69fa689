use anyhow::Result;
use teloxide::prelude::*;

use crate::ai::config::AiConfig;
use crate::messages::{
    format_outcome, order_echo, order_failed, HELP_TEXT, ORDER_PARSING_DISABLED,
};
use crate::pipeline::Shop;
use crate::session::SessionId;

pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, HELP_TEXT)
        .parse_mode(teloxide::types::ParseMode::Html)
        .await?;
    Ok(())
}

/// Treat a plain text message as an order and reply with the bill.
///
/// A failed completion request is reported to the chat and does not change
/// the session's history.
pub async fn handle_order_text(
    bot: Bot,
    msg: Message,
    shop: Shop,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(text) = msg.text().map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    let Some(config) = ai_config else {
        bot.send_message(msg.chat.id, ORDER_PARSING_DISABLED).await?;
        return Ok(());
    };

    let session = SessionId::from(msg.chat.id);
    let reply = match shop.process_order(session, &config, text).await {
        Ok(outcome) => format_outcome(text, &outcome, shop.currency()),
        Err(err) => {
            tracing::warn!(error = %err, chat_id = msg.chat.id.0, "Order extraction failed");
            format!("{}\n\n{}", order_echo(text), order_failed(&err))
        }
    };

    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
