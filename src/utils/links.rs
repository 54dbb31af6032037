//! Display-name and profile-link construction for actors.

/// Join first and last name with a single space, collapsing absent or
/// empty parts. Produces an empty string when both are absent.
#[must_use]
pub fn build_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.unwrap_or("");
    let last = last.unwrap_or("");
    format!("{first} {last}").trim().to_string()
}

/// Deep link to a user profile by numeric id.
#[must_use]
pub fn user_profile_link(id: u64) -> String {
    format!("tg://user?id={id}")
}

/// Web link to a channel profile. Channels without a public username
/// cannot be deep-linked precisely, so those fall back to the bare host.
#[must_use]
pub fn channel_profile_link(username: Option<&str>) -> String {
    match username {
        Some(name) if !name.trim().is_empty() => format!("https://t.me/{name}"),
        _ => "https://t.me/".to_string(),
    }
}
