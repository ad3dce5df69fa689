use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::{
    format_history, suggestions_line, NO_SUGGESTIONS, SESSION_ALREADY_EMPTY, SESSION_RESET,
};
use crate::pipeline::Shop;
use crate::session::SessionId;

pub async fn show_suggestions(bot: Bot, msg: Message, shop: &Shop) -> Result<()> {
    let text = match shop.suggest(SessionId::from(msg.chat.id)).await {
        Some(suggestions) => suggestions_line(&suggestions),
        None => NO_SUGGESTIONS.to_string(),
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

pub async fn show_history(bot: Bot, msg: Message, shop: &Shop) -> Result<()> {
    let history = shop.history(SessionId::from(msg.chat.id)).await;
    bot.send_message(msg.chat.id, format_history(&history)).await?;
    Ok(())
}

pub async fn reset_session(bot: Bot, msg: Message, shop: &Shop) -> Result<()> {
    let cleared = shop.reset(SessionId::from(msg.chat.id)).await;
    tracing::info!(chat_id = msg.chat.id.0, cleared, "Session reset requested");
    let text = if cleared {
        SESSION_RESET
    } else {
        SESSION_ALREADY_EMPTY
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
