pub mod info;
pub mod session;
pub mod text;

pub use info::{show_menu, show_system_info};
pub use session::{reset_session, show_history, show_suggestions};
pub use text::{handle_order_text, help};
