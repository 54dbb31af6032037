//! Rendering a parsed [`Command`] into the final MarkdownV2 reply.

use crate::core::models::Command;

/// Render the reply text for a command. Total: every field has already
/// been escaped (or is a URI, inserted verbatim), and missing pieces
/// render as empty segments rather than failing.
///
/// Template selection is by arity:
/// - no object: `[sender](uri) {verb}了 [target](uri)！`
/// - with object: `[sender](uri) {verb} [target](uri) {object}！`
#[must_use]
pub fn format_reply(command: &Command) -> String {
    let sender = &command.sender;
    let target = &command.target;

    match &command.object {
        None => format!(
            "[{}]({}) {}了 [{}]({})！",
            sender.display_name, sender.profile_uri, command.verb, target.display_name, target.profile_uri,
        ),
        Some(object) => format!(
            "[{}]({}) {} [{}]({}) {}！",
            sender.display_name,
            sender.profile_uri,
            command.verb,
            target.display_name,
            target.profile_uri,
            object,
        ),
    }
}
