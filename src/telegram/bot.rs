//! Telegram transport: long polling, per-message handling, delivery.
//!
//! This layer owns everything the core does not: receiving updates,
//! converting them into the core's [`IncomingMessage`] view, sending the
//! formatted reply with the required delivery options, and retry/error
//! reporting on the send path.

use std::time::Duration;

use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, Message, ParseMode};
use tokio_retry::strategy::{jitter, ExponentialBackoff};
use tokio_retry::Retry;
use tracing::{debug, error, info};

use crate::command_parser::parse_command;
use crate::core::config::AppConfig;
use crate::core::models::{ChannelRef, IncomingMessage, RepliedMessage, UserRef};
use crate::errors::BotError;
use crate::reply_formatter::format_reply;

const SEND_RETRIES: usize = 3;

/// Build the API client, routing through the configured proxy when one
/// is set. The proxy scheme was already validated at config load.
pub fn build_bot(config: &AppConfig) -> Result<Bot, BotError> {
    match &config.proxy {
        Some(proxy) => {
            let client = reqwest::Client::builder()
                .proxy(reqwest::Proxy::all(proxy.url.as_str())?)
                .timeout(Duration::from_secs(30))
                .build()?;
            Ok(Bot::with_client(config.token.clone(), client))
        }
        None => Ok(Bot::new(config.token.clone())),
    }
}

/// Run the bot until shutdown, long-polling for updates and handling
/// each message independently. Duplicate delivery of an update is
/// harmless: the pipeline is stateless per message.
pub async fn run_bot(config: AppConfig) -> Result<(), BotError> {
    let bot = build_bot(&config)?;

    info!("starting long polling");

    let handler = Update::filter_message().endpoint(handle_message);

    Dispatcher::builder(bot, handler)
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(
    bot: Bot,
    msg: Message,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(chat_id = msg.chat.id.0, "processing message");

    let incoming = incoming_from_telegram(&msg);

    let Some(command) = parse_command(&incoming) else {
        debug!("no command recognized, staying silent");
        return Ok(());
    };

    let reply = format_reply(&command);
    debug!(%reply, "formatted reply");

    // The core is done once the reply text exists; delivery failures are
    // reported here and never fed back into it.
    match send_reply(&bot, msg.chat.id, &reply).await {
        Ok(sent) => info!(message_id = sent.id.0, "reply sent"),
        Err(e) => error!("failed to send reply: {e}"),
    }

    Ok(())
}

/// Deliver the reply with the required options: MarkdownV2, content
/// protection on, notification on, link preview off. Transient failures
/// are retried with a short jittered backoff before giving up.
async fn send_reply(bot: &Bot, chat_id: ChatId, text: &str) -> Result<Message, BotError> {
    let strategy = ExponentialBackoff::from_millis(100)
        .map(jitter)
        .take(SEND_RETRIES);

    let sent = Retry::start(strategy, || async {
        bot.send_message(chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .link_preview_options(preview_disabled())
            .protect_content(true)
            .await
    })
    .await?;

    Ok(sent)
}

fn preview_disabled() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Reduce a raw Telegram message to the view the parser consumes.
fn incoming_from_telegram(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        text: msg.text().map(str::to_string),
        sender_user: msg.from.as_ref().map(user_ref),
        sender_channel: msg.sender_chat.as_ref().map(channel_ref),
        replied: msg.reply_to_message().map(|replied| RepliedMessage {
            sender_user: replied.from.as_ref().map(user_ref),
            sender_channel: replied.sender_chat.as_ref().map(channel_ref),
        }),
    }
}

fn user_ref(user: &teloxide::types::User) -> UserRef {
    UserRef {
        id: user.id.0,
        first_name: Some(user.first_name.clone()),
        last_name: user.last_name.clone(),
    }
}

fn channel_ref(chat: &teloxide::types::Chat) -> ChannelRef {
    ChannelRef {
        title: chat.title().map(str::to_string),
        username: chat.username().map(str::to_string),
    }
}
