use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::domains::kind::DELETE_SUFFIX;
use crate::services::publisher::Publisher;

/// Call-site helper for the data-access layer: invoked once after each
/// committed create/update/delete of a tracked entity. Publishing is
/// best-effort and never part of the mutation's atomicity boundary, so
/// failures are logged and swallowed here.
pub struct MutationTracker {
    publisher: Arc<Publisher>,
}

impl MutationTracker {
    pub fn new(publisher: Arc<Publisher>) -> Self {
        Self { publisher }
    }

    pub async fn created<T: Serialize>(&self, entity: &T, kind_tag: &str) {
        self.emit(entity, kind_tag).await;
    }

    pub async fn updated<T: Serialize>(&self, entity: &T, kind_tag: &str) {
        self.emit(entity, kind_tag).await;
    }

    pub async fn deleted<T: Serialize>(&self, entity: &T, kind_tag: &str) {
        self.emit(entity, &format!("{kind_tag}{DELETE_SUFFIX}")).await;
    }

    async fn emit<T: Serialize>(&self, entity: &T, kind_tag: &str) {
        if let Err(err) = self.publisher.publish(entity, kind_tag).await {
            warn!(kind = kind_tag, error = %err, "model sync publish failed");
        }
    }
}
