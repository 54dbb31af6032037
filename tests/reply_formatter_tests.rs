use quotebot::command_parser::parse_command;
use quotebot::core::models::{Actor, Command, IncomingMessage, RepliedMessage, UserRef};
use quotebot::reply_formatter::format_reply;

fn actor(name: &str, uri: &str) -> Actor {
    Actor {
        display_name: name.to_string(),
        profile_uri: uri.to_string(),
    }
}

#[test]
fn test_one_token_template() {
    let command = Command {
        verb: "笑".to_string(),
        object: None,
        sender: actor("Ann", "tg://user?id=1"),
        target: actor("Bob", "tg://user?id=2"),
    };

    // No object: the verb gets the 了 suffix
    assert_eq!(
        format_reply(&command),
        "[Ann](tg://user?id=1) 笑了 [Bob](tg://user?id=2)！"
    );
}

#[test]
fn test_two_token_template() {
    let command = Command {
        verb: "笑".to_string(),
        object: Some("你".to_string()),
        sender: actor("Ann", "tg://user?id=1"),
        target: actor("Bob", "tg://user?id=2"),
    };

    // With an object: plain verb, object appended before the bang
    assert_eq!(
        format_reply(&command),
        "[Ann](tg://user?id=1) 笑 [Bob](tg://user?id=2) 你！"
    );
}

#[test]
fn test_empty_fields_render_as_empty_segments() {
    let command = Command {
        verb: String::new(),
        object: None,
        sender: actor("", ""),
        target: actor("", ""),
    };

    // Formatting is total: missing pieces become empty segments, the
    // template punctuation stays
    assert_eq!(format_reply(&command), "[]() 了 []()！");
}

#[test]
fn test_uris_are_inserted_verbatim() {
    let command = Command {
        verb: "poke".to_string(),
        object: None,
        sender: actor("Ann", "tg://user?id=1"),
        target: actor("News", "https://t.me/news_channel"),
    };

    // URI fields are never escaped, underscore included
    assert_eq!(
        format_reply(&command),
        "[Ann](tg://user?id=1) poke了 [News](https://t.me/news_channel)！"
    );
}

#[test]
fn test_full_pipeline_two_tokens_no_reply() {
    // Worked example: "/$笑 你" from Ann (id=1), not a reply
    let message = IncomingMessage {
        text: Some("/$笑 你".to_string()),
        sender_user: Some(UserRef {
            id: 1,
            first_name: Some("Ann".to_string()),
            last_name: None,
        }),
        ..IncomingMessage::default()
    };

    let command = parse_command(&message).unwrap();
    assert_eq!(
        format_reply(&command),
        "[Ann](tg://user?id=1) 笑 [自己](tg://user?id=1) 你！"
    );
}

#[test]
fn test_full_pipeline_backward_swap() {
    // Worked example: "\$笑" from Ann as a reply to Bob swaps the slots
    let message = IncomingMessage {
        text: Some("\\$笑".to_string()),
        sender_user: Some(UserRef {
            id: 1,
            first_name: Some("Ann".to_string()),
            last_name: None,
        }),
        sender_channel: None,
        replied: Some(RepliedMessage {
            sender_user: Some(UserRef {
                id: 2,
                first_name: Some("Bob".to_string()),
                last_name: None,
            }),
            sender_channel: None,
        }),
    };

    let command = parse_command(&message).unwrap();
    assert_eq!(
        format_reply(&command),
        "[Bob](tg://user?id=2) 笑了 [Ann](tg://user?id=1)！"
    );
}

#[test]
fn test_full_pipeline_escaped_specials_end_to_end() {
    // Specials survive as escaped text all the way to the output
    let message = IncomingMessage {
        text: Some("/$poke right.now".to_string()),
        sender_user: Some(UserRef {
            id: 9,
            first_name: Some("A.nn".to_string()),
            last_name: None,
        }),
        ..IncomingMessage::default()
    };

    let command = parse_command(&message).unwrap();
    assert_eq!(
        format_reply(&command),
        "[A\\.nn](tg://user?id=9) poke [自己](tg://user?id=9) right\\.now！"
    );
}
