//! All Telegram-specific functionality.

pub mod bot;

pub use bot::{build_bot, run_bot};
