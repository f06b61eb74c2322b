use async_trait::async_trait;

use crate::error::Result;

/// Outbound side of the message bus. One sink serves one fixed topic;
/// delivery is single-shot and best-effort.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn send(&self, message: Vec<u8>) -> Result<()>;
}

/// Inbound side of the message bus. `Ok(None)` means the source is closed
/// and no further messages will arrive.
#[async_trait]
pub trait MessageSource: Send {
    async fn next(&mut self) -> Result<Option<Vec<u8>>>;
}
