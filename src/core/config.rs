use std::env;

use url::Url;

use crate::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub token: String,
    pub proxy: Option<ProxyAddress>,
}

/// Proxy address validated at startup so the transport layer never has
/// to re-check the scheme per message.
#[derive(Debug, Clone)]
pub struct ProxyAddress {
    pub scheme: ProxyScheme,
    pub url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyScheme {
    Socks5,
    Http,
    Https,
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file
    /// first if one is present. A missing token or an unusable proxy
    /// address is fatal here, at startup, never per message.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        let proxy = match env::var("TELEGRAM_BOT_PROXY_ADDRESS") {
            Ok(address) => Some(ProxyAddress::parse(&address)?),
            Err(_) => None,
        };

        Ok(Self { token, proxy })
    }
}

impl ProxyAddress {
    /// Parse and validate a `scheme://host:port` proxy address.
    /// Recognized schemes are `socks5`, `http`, and `https`.
    pub fn parse(address: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(address)
            .map_err(|e| ConfigError::InvalidProxyAddress(address.to_string(), e.to_string()))?;

        let scheme = match url.scheme() {
            "socks5" => ProxyScheme::Socks5,
            "http" => ProxyScheme::Http,
            "https" => ProxyScheme::Https,
            other => return Err(ConfigError::UnsupportedProxyScheme(other.to_string())),
        };

        Ok(Self { scheme, url })
    }
}
