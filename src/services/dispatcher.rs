use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domains::entities::{Borrower, LoanUpdate};
use crate::domains::kind;
use crate::error::{LendSyncError, Result};
use crate::interfaces::storage::SyncStore;

/// Decodes and applies the payload of one inbound kind. New kinds are added
/// by registering a handler, not by editing a switch.
#[async_trait]
pub trait ApplyEvent: Send + Sync {
    fn kind(&self) -> &str;
    async fn apply(&self, payload: &[u8]) -> Result<()>;
}

/// Routes inbound messages by their kind prefix to the registered handler.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Arc<dyn ApplyEvent>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuses duplicate registrations for a kind.
    pub fn register(&mut self, handler: Arc<dyn ApplyEvent>) -> bool {
        let name = handler.kind().to_string();
        if self.handlers.contains_key(&name) {
            return false;
        }
        self.handlers.insert(name, handler);
        true
    }

    /// Applies one raw message. Malformed framing and unrecognized kinds are
    /// dropped without error; decode and storage failures are returned with
    /// the offending kind and payload so the caller can log them. A bad
    /// message never halts the inbound loop.
    pub async fn dispatch(&self, raw: &[u8]) -> Result<()> {
        let Some(split) = raw.iter().position(|byte| *byte == b':') else {
            warn!(
                message = %String::from_utf8_lossy(raw),
                "dropping inbound message without a kind prefix"
            );
            return Ok(());
        };
        let Ok(kind_tag) = std::str::from_utf8(&raw[..split]) else {
            warn!("dropping inbound message with a non-utf8 kind prefix");
            return Ok(());
        };
        let payload = &raw[split + 1..];

        let Some(handler) = self.handlers.get(kind_tag) else {
            debug!(kind = kind_tag, "ignoring inbound message of unhandled kind");
            return Ok(());
        };

        handler.apply(payload).await.map_err(|err| {
            LendSyncError::Runtime(format!(
                "applying inbound '{kind_tag}' failed: {err}; payload: {}",
                String::from_utf8_lossy(payload)
            ))
        })
    }
}

pub struct LoanApply {
    store: Arc<dyn SyncStore>,
}

impl LoanApply {
    pub fn new(store: Arc<dyn SyncStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ApplyEvent for LoanApply {
    fn kind(&self) -> &str {
        kind::LOAN
    }

    async fn apply(&self, payload: &[u8]) -> Result<()> {
        let update: LoanUpdate = serde_json::from_slice(payload)
            .map_err(|e| LendSyncError::Serialization(e.to_string()))?;
        self.store.upsert_loan(update).await
    }
}

pub struct BorrowerApply {
    store: Arc<dyn SyncStore>,
}

impl BorrowerApply {
    pub fn new(store: Arc<dyn SyncStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ApplyEvent for BorrowerApply {
    fn kind(&self) -> &str {
        kind::BORROWER
    }

    async fn apply(&self, payload: &[u8]) -> Result<()> {
        let borrower: Borrower = serde_json::from_slice(payload)
            .map_err(|e| LendSyncError::Serialization(e.to_string()))?;
        self.store.upsert_borrower(borrower).await
    }
}
