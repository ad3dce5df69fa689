use anyhow::Result;
use teloxide::prelude::*;

use crate::messages::format_menu;
use crate::pipeline::Shop;
use crate::system_info::get_system_info;

pub async fn show_menu(bot: Bot, msg: Message, shop: &Shop) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, items = shop.catalog().len(), "Showing menu");
    bot.send_message(msg.chat.id, format_menu(shop.catalog(), shop.currency()))
        .await?;
    Ok(())
}

pub async fn show_system_info(bot: Bot, msg: Message, shop: &Shop) -> Result<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "Showing system info");
    let sessions = shop.sessions().len().await;
    bot.send_message(
        msg.chat.id,
        get_system_info(shop.catalog().len(), shop.currency(), sessions),
    )
    .await?;
    Ok(())
}
