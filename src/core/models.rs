/// A participant rendered into the reply: either the command's sender or
/// its target. Both fields may be empty; an empty `display_name` still
/// renders as an empty-label link rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub display_name: String,
    pub profile_uri: String,
}

/// Parsed command, produced once per message by the parser and consumed
/// once by the formatter. `verb` and `object` are already MarkdownV2-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub object: Option<String>,
    pub sender: Actor,
    pub target: Actor,
}

/// Read-only view of an inbound Telegram message, reduced to the fields
/// the parser consumes. The transport layer builds this from the raw
/// update; keeping absence explicit here (instead of sentinel empty
/// strings) keeps the parser total over any input.
#[derive(Debug, Clone, Default)]
pub struct IncomingMessage {
    pub text: Option<String>,
    pub sender_user: Option<UserRef>,
    pub sender_channel: Option<ChannelRef>,
    pub replied: Option<RepliedMessage>,
}

#[derive(Debug, Clone)]
pub struct UserRef {
    pub id: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A channel posting as the message author (Telegram "sender chat").
#[derive(Debug, Clone)]
pub struct ChannelRef {
    pub title: Option<String>,
    pub username: Option<String>,
}

/// Author info of the message being replied to.
#[derive(Debug, Clone, Default)]
pub struct RepliedMessage {
    pub sender_user: Option<UserRef>,
    pub sender_channel: Option<ChannelRef>,
}
