pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

/// Delivery seam for the composed message text.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
