//! quotebot - a Telegram bot that turns a lightweight command syntax into
//! quote-style replies.
//!
//! An incoming text message starting with `/` or `\` (plus a `$` marker
//! for ASCII command words) is parsed into a verb, an optional object,
//! and two participants, then rendered as an "X verbed Y" MarkdownV2
//! reply. Everything else stays silent.
//!
//! # Architecture
//!
//! The crate is strictly layered:
//! - [`command_parser`] and [`reply_formatter`] are the pure core: one
//!   message in, one optional reply string out, no state between calls.
//! - [`telegram`] owns the transport: long polling via teloxide, reply
//!   delivery with retries, and proxy support.
//! - [`core::config`] loads the token and optional proxy address from
//!   the environment at startup.
//!
//! # Example
//!
//! ```no_run
//! use quotebot::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     quotebot::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     quotebot::telegram::run_bot(config).await?;
//!     Ok(())
//! }
//! ```

pub mod command_parser;
pub mod core;
pub mod errors;
pub mod reply_formatter;
pub mod telegram;
pub mod utils;

/// Configure structured logging, filtered by `RUST_LOG` (default `info`).
/// Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
