use anyhow::{Context, Result};
use teloxide::{dispatching::UpdateHandler, prelude::*};

pub mod ai;
mod commands;
mod config;
mod handlers;
pub mod history;
pub mod menu;
mod messages;
pub mod order;
pub mod pipeline;
pub mod pricing;
pub mod session;
mod system_info;
mod text_utils;

pub use ai::config::AiConfig;
pub use commands::Command;
pub use config::Config;
pub use handlers::{
    handle_order_text, help, reset_session, show_history, show_menu, show_suggestions,
    show_system_info,
};
pub use history::OrderHistory;
pub use menu::PriceCatalog;
pub use messages::{format_bill, format_history, format_menu, format_outcome};
pub use order::{Extraction, OrderLine};
pub use pipeline::{settle_order, OrderOutcome, Shop};
pub use pricing::{price, Bill};
pub use session::{Session, SessionId, SessionStore};
pub use text_utils::{normalize_item, title_case};

/// Update handler tree: commands first, any other text is an order.
pub fn schema() -> UpdateHandler<anyhow::Error> {
    Update::filter_message()
        .branch(dptree::entry().filter_command::<Command>().endpoint(
            |bot: Bot, msg: Message, cmd: Command, shop: Shop| async move {
                cmd.dispatch(bot, msg, shop).await
            },
        ))
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some()).endpoint(handle_order_text),
        )
}

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Loads .env first so RUST_LOG from it applies to the subscriber.
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting order bot...");

    let catalog = PriceCatalog::load(&config.menu_path)
        .with_context(|| format!("cannot start without a menu at {}", config.menu_path))?;
    tracing::info!(
        path = %config.menu_path,
        items = catalog.len(),
        currency = %config.currency,
        "Menu loaded"
    );

    if config.ai.is_none() {
        tracing::warn!("GROQ_API_KEY is not set, order parsing is disabled");
    }

    let shop = Shop::new(catalog, config.currency);
    let bot = Bot::from_env();

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![shop, config.ai])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
