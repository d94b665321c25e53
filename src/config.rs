use std::env;

pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// When set, tokens are signed HS256 JWTs. When absent, the legacy
    /// unsigned base64 codec is used.
    pub token_secret: Option<String>,
    pub token_ttl_secs: i64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let token_secret = env::var("TOKEN_SECRET").ok().filter(|s| !s.is_empty());
        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        Ok(Self {
            host,
            port,
            token_secret,
            token_ttl_secs,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            token_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}
