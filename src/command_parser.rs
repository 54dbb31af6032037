//! Recognition of the `/$verb [object]` command syntax.
//!
//! The parser is a pure function of one [`IncomingMessage`]; any message
//! that fails a recognition check simply yields `None`, which is the
//! expected outcome for ordinary chat traffic, not an error.

use tracing::debug;

use crate::core::models::{Actor, ChannelRef, Command, IncomingMessage, UserRef};
use crate::utils::{build_name, channel_profile_link, escape_markdown_v2, user_profile_link};

/// Display name used for the target when the command is not a reply.
pub const SELF_NAME: &str = "自己";

/// Parse a message into a [`Command`], or `None` when the message does
/// not match the command syntax.
///
/// Recognition rules, in order:
/// 1. the text must be at least two characters long;
/// 2. it must start with `/` (forward) or `\` (backward);
/// 3. if the character after the prefix is ASCII, it must be the `$`
///    marker (`/$…` or `\$…`); a non-ASCII character needs no marker.
///
/// The command body is the text with the first `$` removed and the
/// prefix character dropped, escaped for MarkdownV2, then split on a
/// single space into the verb and an optional object.
#[must_use]
pub fn parse_command(message: &IncomingMessage) -> Option<Command> {
    let text = message.text.as_deref()?;

    if text.chars().count() < 2 {
        debug!("message too short, ignoring");
        return None;
    }

    let starts_with_slash = text.starts_with('/');
    let starts_with_backslash = text.starts_with('\\');

    if !starts_with_slash && !starts_with_backslash {
        debug!("message does not start with / or \\, ignoring");
        return None;
    }

    // ASCII command words need the "$" marker right after the prefix so
    // that ordinary bot commands like /start never trigger a reply.
    // Non-ASCII words are distinctive enough without it.
    let after_prefix = text.chars().nth(1)?;
    if after_prefix.is_ascii() {
        if starts_with_slash && !text.starts_with("/$") {
            debug!("ASCII command without $ marker after /, ignoring");
            return None;
        }
        if starts_with_backslash && !text.starts_with("\\$") {
            debug!("ASCII command without $ marker after \\, ignoring");
            return None;
        }
    }

    // Remove the first "$" wherever it appears, then drop the prefix
    // character. The removal is deliberately not anchored at index 1:
    // when the marker was not required, a "$" later in the body is
    // stripped once too. That mirrors the behavior this bot has always
    // had, even though it looks more like an accident than a feature.
    let without_dollar = text.replacen('$', "", 1);
    let body = &without_dollar[1..];

    debug!(body, "command body after prefix removal");

    let escaped = escape_markdown_v2(body);
    let mut tokens = escaped.splitn(2, ' ');
    let verb = tokens.next()?.to_string();
    let object = tokens.next().map(str::to_string);

    let sender = resolve_sender(message);
    let (sender, target) = resolve_target(message, sender, starts_with_backslash);

    Some(Command {
        verb,
        object,
        sender,
        target,
    })
}

/// The message author as an actor. A channel posting as the sender wins
/// over the user; a message with neither renders as an empty actor.
fn resolve_sender(message: &IncomingMessage) -> Actor {
    if let Some(channel) = &message.sender_channel {
        return actor_from_channel(channel);
    }
    if let Some(user) = &message.sender_user {
        return actor_from_user(user);
    }
    Actor {
        display_name: String::new(),
        profile_uri: String::new(),
    }
}

/// Resolve the reply target and apply the backward-prefix swap.
///
/// With a replied-to message present, the target is its author (channel
/// wins over user, same as for the sender) and a backward prefix swaps
/// sender and target entirely. Without one, the target falls back to a
/// self-reference pointing at the sender's own profile, and no swap
/// applies.
fn resolve_target(
    message: &IncomingMessage,
    sender: Actor,
    starts_with_backslash: bool,
) -> (Actor, Actor) {
    match &message.replied {
        Some(replied) => {
            let mut target = Actor {
                display_name: String::new(),
                profile_uri: String::new(),
            };
            if let Some(user) = &replied.sender_user {
                target = actor_from_user(user);
            }
            if let Some(channel) = &replied.sender_channel {
                target = actor_from_channel(channel);
            }

            if starts_with_backslash {
                debug!("backward prefix, swapping sender and target");
                swap(sender, target)
            } else {
                (sender, target)
            }
        }
        None => {
            debug!("not a reply, targeting self");
            let target = Actor {
                display_name: SELF_NAME.to_string(),
                profile_uri: sender.profile_uri.clone(),
            };
            (sender, target)
        }
    }
}

fn swap(sender: Actor, target: Actor) -> (Actor, Actor) {
    (target, sender)
}

fn actor_from_user(user: &UserRef) -> Actor {
    Actor {
        display_name: escape_markdown_v2(&build_name(
            user.first_name.as_deref(),
            user.last_name.as_deref(),
        )),
        profile_uri: user_profile_link(user.id),
    }
}

fn actor_from_channel(channel: &ChannelRef) -> Actor {
    Actor {
        display_name: escape_markdown_v2(channel.title.as_deref().unwrap_or("")),
        profile_uri: channel_profile_link(channel.username.as_deref()),
    }
}
