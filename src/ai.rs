//! Hosted language-model helpers.

pub mod common;
pub mod config;
pub mod extract;
pub mod prompts;
