//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

use crate::history::OrderHistory;
use crate::menu::PriceCatalog;
use crate::pipeline::OrderOutcome;
use crate::pricing::Bill;
use crate::text_utils::{title_case, truncate_chars};

pub const HELP_TEXT: &str = "Type your order and I will price it, for example '2 burgers and 1 coke'.\n\n\
             <b>Commands:</b>\n\
             /menu - Show the menu with prices.\n\
             /suggest - Show what you order most often.\n\
             /history - Show the orders placed in this chat.\n\
             /reset - Forget the orders placed in this chat.\n\
             /info - Show system information.";

pub const ORDER_PARSING_DISABLED: &str =
    "Order parsing is disabled: no completion API key is configured.";
pub const COULD_NOT_EXTRACT: &str = "❌ Could not extract order. Please try again.";
pub const MENU_EMPTY: &str = "The menu is empty.";
pub const NO_HISTORY: &str = "You have not ordered anything yet.";
pub const NO_SUGGESTIONS: &str = "No suggestions yet. Place an order first!";
pub const SESSION_RESET: &str = "Order history cleared.";
pub const SESSION_ALREADY_EMPTY: &str = "There was no order history to clear.";

// Telegram rejects messages over 4096 characters; these caps keep a failure
// report (echo, error, raw output) under that limit.
pub const MAX_ECHO_CHARS: usize = 500;
pub const MAX_RAW_OUTPUT_CHARS: usize = 3000;

pub fn order_echo(order_text: &str) -> String {
    format!("🗣 You typed: {}", truncate_chars(order_text, MAX_ECHO_CHARS))
}

pub fn order_failed(err: &anyhow::Error) -> String {
    format!("❌ The ordering service failed: {err}")
}

pub fn suggestions_line(suggestions: &[String]) -> String {
    format!("🍽️ You often order: {}", suggestions.join(", "))
}

/// Bill section: the priced lines, the total and the unavailable items.
pub fn format_bill(bill: &Bill, currency: &str) -> String {
    let mut text = String::from("🧾 Your Bill:\n");
    for line in &bill.details {
        text.push_str(&format!("- {line}\n"));
    }
    text.push_str(&format!("💵 Total: {} {currency}\n", bill.total));

    if !bill.not_found.is_empty() {
        text.push_str("❌ These items are not available:\n");
        for name in &bill.not_found {
            text.push_str(&format!("- {}\n", title_case(name)));
        }
    }
    text
}

/// Full reply for one submitted order.
pub fn format_outcome(order_text: &str, outcome: &OrderOutcome, currency: &str) -> String {
    let mut text = order_echo(order_text);
    text.push_str("\n\n");

    match outcome {
        OrderOutcome::Billed { bill, suggestions } => {
            text.push_str(&format_bill(bill, currency));
            if let Some(suggestions) = suggestions.as_deref().filter(|s| !s.is_empty()) {
                text.push('\n');
                text.push_str(&suggestions_line(suggestions));
            }
        }
        OrderOutcome::Empty => text.push_str(COULD_NOT_EXTRACT),
        OrderOutcome::NotUnderstood { raw, message } => {
            text.push_str(&format!("❌ JSON parsing failed: {message}\n"));
            text.push_str(&format!(
                "🔁 Raw model output: {}\n\n",
                truncate_chars(raw, MAX_RAW_OUTPUT_CHARS)
            ));
            text.push_str(COULD_NOT_EXTRACT);
        }
    }
    text.trim_end().to_string()
}

pub fn format_menu(catalog: &PriceCatalog, currency: &str) -> String {
    if catalog.is_empty() {
        return MENU_EMPTY.to_string();
    }
    let mut text = String::from("📋 Menu:\n");
    for (name, price) in catalog.iter() {
        text.push_str(&format!("• {} - {price} {currency}\n", title_case(name)));
    }
    text
}

pub fn format_history(history: &OrderHistory) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }
    let mut text = String::from("🕘 Your orders:\n");
    for (idx, entry) in history.entries().iter().enumerate() {
        text.push_str(&format!("{}. {}\n", idx + 1, entry.join(", ")));
    }
    text
}
