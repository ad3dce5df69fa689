use std::env;

use crate::ai::config::AiConfig;

pub const DEFAULT_MENU_PATH: &str = "menu.csv";
pub const DEFAULT_CURRENCY: &str = "BDT";

#[derive(Clone, Debug)]
pub struct Config {
    pub menu_path: String,
    pub currency: String,
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let menu_path = env::var("MENU_PATH").unwrap_or_else(|_| DEFAULT_MENU_PATH.to_string());
        let currency = env::var("CURRENCY").unwrap_or_else(|_| DEFAULT_CURRENCY.to_string());
        let ai = AiConfig::from_env();
        Self {
            menu_path,
            currency,
            ai,
        }
    }
}
