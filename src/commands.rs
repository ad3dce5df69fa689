use anyhow::Result;
use teloxide::{prelude::*, utils::command::BotCommands};

use crate::handlers::{
    help, reset_session, show_history, show_menu, show_suggestions, show_system_info,
};
use crate::pipeline::Shop;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "show the menu with prices.")]
    Menu,
    #[command(description = "show what you order most often.")]
    Suggest,
    #[command(description = "show the orders placed in this chat.")]
    History,
    #[command(description = "forget the orders placed in this chat.")]
    Reset,
    #[command(description = "show system information.")]
    Info,
}

impl Command {
    pub async fn dispatch(self, bot: Bot, msg: Message, shop: Shop) -> Result<()> {
        match self {
            Command::Start | Command::Help => help(bot, msg).await?,
            Command::Menu => show_menu(bot, msg, &shop).await?,
            Command::Suggest => show_suggestions(bot, msg, &shop).await?,
            Command::History => show_history(bot, msg, &shop).await?,
            Command::Reset => reset_session(bot, msg, &shop).await?,
            Command::Info => show_system_info(bot, msg, &shop).await?,
        }
        Ok(())
    }
}
