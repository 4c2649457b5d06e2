use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use super::Notifier;
use crate::config::TelegramConfig;

/// Single-attempt delivery through the Telegram Bot API. Credentials arrive
/// validated; a transport or non-2xx failure surfaces to the caller.
pub struct TelegramNotifier {
    cfg: TelegramConfig,
    client: Client,
    timeout: Duration,
}

impl TelegramNotifier {
    pub fn new(cfg: TelegramConfig) -> Self {
        Self {
            cfg,
            client: Client::new(),
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.cfg.bot_token
        )
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        let params = [
            ("chat_id", self.cfg.chat_id.as_str()),
            ("text", text),
            ("disable_web_page_preview", "true"),
        ];

        self.client
            .post(self.endpoint())
            .timeout(self.timeout)
            .form(&params)
            .send()
            .await
            .context("telegram post")?
            .error_for_status()
            .context("telegram non-2xx")?;
        Ok(())
    }
}
