//! Source declarations and delivery credentials.
//!
//! Credentials are read from the environment exactly once, at startup, into
//! an explicit struct; the notifier never touches the environment itself.

use anyhow::{bail, Result};

pub const DEFAULT_STATE_PATH: &str = "seen.json";

const ENV_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// One monitored custody-portal table.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub title: String,
    pub url: String,
}

impl SourceSpec {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Monitored sources, in display order.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new(
            "📌 Últimos eventos corporativos",
            "https://www.comafi.com.ar/custodiaglobal/eventos-corporativos.aspx",
        ),
        SourceSpec::new(
            "💰 Últimos avisos de dividendos",
            "https://www.comafi.com.ar/custodiaglobal/dividendos.aspx",
        ),
        SourceSpec::new(
            "🏦 Últimos pagos",
            "https://www.comafi.com.ar/custodiaglobal/pagos.aspx",
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramConfig {
    /// Fails before any delivery attempt when either value is missing.
    pub fn from_env() -> Result<Self> {
        let bot_token = non_empty_env(ENV_BOT_TOKEN);
        let chat_id = non_empty_env(ENV_CHAT_ID);
        match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Ok(Self { bot_token, chat_id }),
            _ => bail!("Faltan TELEGRAM_BOT_TOKEN o TELEGRAM_CHAT_ID."),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[serial_test::serial]
    #[test]
    fn missing_credentials_fail_fast() {
        env::remove_var(ENV_BOT_TOKEN);
        env::remove_var(ENV_CHAT_ID);
        assert!(TelegramConfig::from_env().is_err());

        env::set_var(ENV_BOT_TOKEN, "123:abc");
        assert!(TelegramConfig::from_env().is_err());
        env::remove_var(ENV_BOT_TOKEN);
    }

    #[serial_test::serial]
    #[test]
    fn both_credentials_present_succeed() {
        env::set_var(ENV_BOT_TOKEN, "123:abc");
        env::set_var(ENV_CHAT_ID, "-100200300");
        let cfg = TelegramConfig::from_env().unwrap();
        assert_eq!(cfg.bot_token, "123:abc");
        assert_eq!(cfg.chat_id, "-100200300");
        env::remove_var(ENV_BOT_TOKEN);
        env::remove_var(ENV_CHAT_ID);
    }
}
