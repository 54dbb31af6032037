use thiserror::Error;

/// Fatal startup-time configuration problems. The process refuses to
/// start on any of these; none of them can occur per message.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,

    #[error("Invalid proxy address \"{0}\": {1}")]
    InvalidProxyAddress(String, String),

    #[error("Unsupported proxy scheme: {0}. Use socks5:// or http://")]
    UnsupportedProxyScheme(String),
}

/// Transport-side failures. Delivery errors are logged and reported
/// here; the core pipeline has already finished by the time one occurs.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Failed to access Telegram API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<teloxide::RequestError> for BotError {
    fn from(error: teloxide::RequestError) -> Self {
        BotError::ApiError(error.to_string())
    }
}

impl From<reqwest::Error> for BotError {
    fn from(error: reqwest::Error) -> Self {
        BotError::HttpError(error.to_string())
    }
}
