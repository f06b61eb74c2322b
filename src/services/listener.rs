use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::interfaces::sink::MessageSource;
use crate::services::dispatcher::Dispatcher;

/// Long-lived inbound worker: reads one message at a time from the source
/// and hands it to the dispatcher. Read and apply failures are logged and
/// the loop continues; only shutdown or source closure stops it.
pub struct Listener {
    dispatcher: Arc<Dispatcher>,
}

pub struct ListenerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Listener {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn start(self, mut source: Box<dyn MessageSource>) -> ListenerHandle {
        let (shutdown, mut stop_rx) = watch::channel(false);
        let dispatcher = self.dispatcher;

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                    next = source.next() => match next {
                        Ok(Some(raw)) => {
                            if let Err(err) = dispatcher.dispatch(&raw).await {
                                error!(error = %err, "inbound message dropped");
                            }
                        }
                        Ok(None) => {
                            info!("inbound source closed, stopping listener");
                            break;
                        }
                        Err(err) => {
                            error!(error = %err, "inbound read failed");
                        }
                    }
                }
            }
        });

        ListenerHandle { shutdown, task }
    }
}

impl ListenerHandle {
    /// Signals the worker and waits for it to drain its current message.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
