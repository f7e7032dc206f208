use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub whatsapp_phone: String,
    pub studio_name: String,
    pub port: u16,
    pub rust_log: String,
    pub session_idle_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            whatsapp_phone: require_env("WHATSAPP_PHONE")?,
            studio_name: std::env::var("STUDIO_NAME").unwrap_or_else(|_| "Cerimagen".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_idle_minutes: std::env::var("SESSION_IDLE_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .context("SESSION_IDLE_MINUTES must be a positive number of minutes")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
