use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kafka::consumer::{Consumer, FetchOffset};
use kafka::producer::{Producer, Record, RequiredAcks};
use tokio::sync::mpsc;
use tokio::task;

use crate::config::KafkaConfig;
use crate::error::{LendSyncError, Result};
use crate::interfaces::sink::{EventSink, MessageSource};

const DEFAULT_CLIENT_ID: &str = "lendsync";
const ACK_TIMEOUT: Duration = Duration::from_secs(5);
const INBOUND_PARTITION: i32 = 0;
const CHANNEL_CAPACITY: usize = 64;

// The bus client speaks plaintext only; refusing an authenticated broker is
// better than silently connecting unauthenticated.
fn ensure_plain_connection(config: &KafkaConfig) -> Result<()> {
    if config.auth_enabled() {
        return Err(LendSyncError::Config(
            "broker authentication is enabled but the bus client only supports \
             unauthenticated connections"
                .to_string(),
        ));
    }
    Ok(())
}

/// Producer side of the bus. Every `send` opens its own short-lived producer
/// against the fixed outbound topic and drops it unconditionally, so two
/// publishes never share connection state.
#[derive(Debug)]
pub struct KafkaSink {
    brokers: Vec<String>,
    topic: String,
    client_id: String,
}

impl KafkaSink {
    pub fn new(config: &KafkaConfig) -> Result<Self> {
        ensure_plain_connection(config)?;
        Ok(Self {
            brokers: vec![config.broker()],
            topic: config.topics.produces.for_borrower.clone(),
            client_id: config
                .client_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
        })
    }
}

#[async_trait]
impl EventSink for KafkaSink {
    async fn send(&self, message: Vec<u8>) -> Result<()> {
        let brokers = self.brokers.clone();
        let topic = self.topic.clone();
        let client_id = self.client_id.clone();

        task::spawn_blocking(move || {
            let mut producer = Producer::from_hosts(brokers)
                .with_client_id(client_id)
                .with_ack_timeout(ACK_TIMEOUT)
                .with_required_acks(RequiredAcks::One)
                .create()
                .map_err(|e| LendSyncError::Bus(e.to_string()))?;
            producer
                .send(&Record::from_value(&topic, message.as_slice()))
                .map_err(|e| LendSyncError::Bus(e.to_string()))
        })
        .await
        .map_err(|e| LendSyncError::Runtime(e.to_string()))?
    }
}

/// Consumer side of the bus: one connection to the fixed inbound topic,
/// partition 0, reading from the oldest retained offset. No consumer group
/// is joined and no offset is ever committed, so a restart re-reads the full
/// retained backlog.
pub struct KafkaSource {
    receiver: mpsc::Receiver<Result<Vec<u8>>>,
    stop: Arc<AtomicBool>,
}

impl KafkaSource {
    pub fn connect(config: &KafkaConfig) -> Result<Self> {
        ensure_plain_connection(config)?;
        let brokers = vec![config.broker()];
        let topic = config.topics.consumes.for_lender.clone();
        let client_id = config
            .client_id
            .clone()
            .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string());

        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        task::spawn_blocking(move || {
            poll_loop(brokers, topic, client_id, &stop_flag, &sender);
        });

        Ok(Self { receiver, stop })
    }
}

// Connection and poll errors are forwarded to the listener, which logs them
// and keeps reading; there is no backoff between attempts. Backpressure from
// the bounded channel throttles the loop when the listener falls behind.
fn poll_loop(
    brokers: Vec<String>,
    topic: String,
    client_id: String,
    stop: &AtomicBool,
    sender: &mpsc::Sender<Result<Vec<u8>>>,
) {
    while !stop.load(Ordering::Relaxed) {
        let mut consumer = match Consumer::from_hosts(brokers.clone())
            .with_client_id(client_id.clone())
            .with_topic_partitions(topic.clone(), &[INBOUND_PARTITION])
            .with_fallback_offset(FetchOffset::Earliest)
            .create()
        {
            Ok(consumer) => consumer,
            Err(err) => {
                if sender
                    .blocking_send(Err(LendSyncError::Bus(err.to_string())))
                    .is_err()
                {
                    return;
                }
                continue;
            }
        };

        while !stop.load(Ordering::Relaxed) {
            match consumer.poll() {
                Ok(sets) => {
                    for set in sets.iter() {
                        for msg in set.messages() {
                            if sender.blocking_send(Ok(msg.value.to_vec())).is_err() {
                                return;
                            }
                        }
                    }
                }
                Err(err) => {
                    if sender
                        .blocking_send(Err(LendSyncError::Bus(err.to_string())))
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }
        return;
    }
}

#[async_trait]
impl MessageSource for KafkaSource {
    async fn next(&mut self) -> Result<Option<Vec<u8>>> {
        match self.receiver.recv().await {
            Some(item) => item.map(Some),
            None => Ok(None),
        }
    }
}

impl Drop for KafkaSource {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
