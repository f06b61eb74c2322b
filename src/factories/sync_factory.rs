use std::sync::Arc;

use tracing::info;

use crate::bus::{KafkaSink, KafkaSource};
use crate::config::KafkaConfig;
use crate::error::Result;
use crate::interfaces::storage::{EntityLookup, SyncStore};
use crate::services::dispatcher::{BorrowerApply, Dispatcher, LoanApply};
use crate::services::listener::{Listener, ListenerHandle};
use crate::services::publisher::Publisher;
use crate::services::shaper::Shaper;
use crate::services::tracker::MutationTracker;

/// The wired-up synchronization subsystem: the publisher (and its tracker
/// facade) for outbound mutations, plus the running inbound listener.
pub struct SyncRuntime {
    pub publisher: Arc<Publisher>,
    pub tracker: MutationTracker,
    listener: ListenerHandle,
}

impl SyncRuntime {
    pub async fn shutdown(self) {
        self.listener.stop().await;
    }
}

/// Builds both directions of the sync subsystem from one environment's bus
/// configuration and starts the inbound worker.
pub fn start_sync(
    config: &KafkaConfig,
    store: Arc<dyn SyncStore>,
    lookup: Arc<dyn EntityLookup>,
) -> Result<SyncRuntime> {
    let sink = Arc::new(KafkaSink::new(config)?);
    let publisher = Arc::new(Publisher::new(Shaper::new(lookup), sink));
    let tracker = MutationTracker::new(publisher.clone());

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(LoanApply::new(store.clone())));
    dispatcher.register(Arc::new(BorrowerApply::new(store)));

    let source = KafkaSource::connect(config)?;
    let listener = Listener::new(Arc::new(dispatcher)).start(Box::new(source));
    info!(
        outbound = %config.topics.produces.for_borrower,
        inbound = %config.topics.consumes.for_lender,
        "model synchronization started"
    );

    Ok(SyncRuntime {
        publisher,
        tracker,
        listener,
    })
}
