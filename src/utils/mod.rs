//! Shared name-building and escaping helpers.

pub mod links;
pub mod markdown;

pub use links::{build_name, channel_profile_link, user_profile_link};
pub use markdown::escape_markdown_v2;
