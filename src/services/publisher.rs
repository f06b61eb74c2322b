use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domains::kind;
use crate::error::{LendSyncError, Result};
use crate::interfaces::sink::EventSink;
use crate::services::shaper::Shaper;

/// Publishes one framed message per entity mutation. The wire format is
/// `"<kind>:<json>"`; the `_delete` suffix is stripped from the prefix, so a
/// tombstone is only distinguishable by its payload's `delete` field.
pub struct Publisher {
    shaper: Shaper,
    sink: Arc<dyn EventSink>,
}

impl Publisher {
    pub fn new(shaper: Shaper, sink: Arc<dyn EventSink>) -> Self {
        Self { shaper, sink }
    }

    pub async fn publish<T: Serialize>(&self, entity: &T, kind_tag: &str) -> Result<()> {
        let Some(projection) = self.shaper.shape(entity, kind_tag).await? else {
            debug!(kind = kind_tag, "entity yields no projection, skipping publish");
            return Ok(());
        };
        let payload = serde_json::to_string(&projection)
            .map_err(|e| LendSyncError::Serialization(e.to_string()))?;

        let prefix = kind::base(kind_tag);
        let mut message = Vec::with_capacity(prefix.len() + 1 + payload.len());
        message.extend_from_slice(prefix.as_bytes());
        message.push(b':');
        message.extend_from_slice(payload.as_bytes());

        self.sink.send(message).await
    }
}
