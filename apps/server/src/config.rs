use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    /// HS256 key shared with the identity provider.
    pub jwt_secret: Vec<u8>,
    pub jwt_audience: Option<String>,
    /// Where unauthenticated requests are sent.
    pub auth_redirect: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("NW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid NW_LISTEN_ADDR")?;
        let db_path = env_or("NW_DB_PATH", "./db/app.db");
        let cors_allow = env_or("NW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("NW_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let static_dir = env_or("NW_STATIC_DIR", "dist");

        let raw_secret = std::env::var("NW_JWT_SECRET").context("NW_JWT_SECRET must be set")?;
        let jwt_secret = decode_secret_key(&raw_secret)?;
        let jwt_audience = std::env::var("NW_JWT_AUDIENCE")
            .ok()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());
        let auth_redirect = env_or("NW_AUTH_REDIRECT", "/auth");

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            jwt_secret,
            jwt_audience,
            auth_redirect,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
