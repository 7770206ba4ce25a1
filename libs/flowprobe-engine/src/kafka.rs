use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use rdkafka::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::{BorrowedMessage, Message};

use flowprobe_api::record::StreamRecord;

use crate::config::StreamConfig;
use crate::error::EngineError;
use crate::identity::SubscriberIdentity;
use crate::stream::EventStream;

/// Kafka-backed lifecycle-event stream.
///
/// Owns one consumer subscribed to the export topic. The consumer group is
/// per-session (see `SubscriberIdentity`), so each run reads the topic from
/// the earliest retained offset.
pub struct KafkaEventStream {
    consumer: StreamConsumer,
}

impl KafkaEventStream {
    /// Create the consumer and subscribe to the export topic.
    ///
    /// Identity must be resolved before this point; an unreachable broker
    /// surfaces here or on the first poll as a fatal transport error.
    pub fn subscribe(
        stream: &StreamConfig,
        identity: &SubscriberIdentity,
    ) -> Result<Self, EngineError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &stream.brokers)
            .set("client.id", &identity.client_id)
            .set("group.id", &identity.group_id)
            .set("auto.offset.reset", "earliest")
            .set("enable.partition.eof", "false")
            .create()
            .map_err(|e| EngineError::Transport(format!("create consumer: {e}")))?;

        consumer
            .subscribe(&[stream.topic.as_str()])
            .map_err(|e| EngineError::Transport(format!("subscribe to '{}': {e}", stream.topic)))?;

        tracing::info!(
            brokers = %stream.brokers,
            topic = %stream.topic,
            group = %identity.group_id,
            "subscribed to lifecycle stream"
        );
        Ok(Self { consumer })
    }

    fn to_record(message: &BorrowedMessage<'_>) -> StreamRecord {
        // Key and value are UTF-8 text on this topic; lossy conversion keeps
        // a corrupt payload at classification level instead of killing the
        // session.
        let key = message
            .key()
            .map(|k| String::from_utf8_lossy(k).into_owned());
        let value = message
            .payload()
            .map(|v| String::from_utf8_lossy(v).into_owned())
            .unwrap_or_default();
        StreamRecord {
            offset: message.offset(),
            key,
            value,
        }
    }
}

impl EventStream for KafkaEventStream {
    fn poll_batch(
        &mut self,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StreamRecord>, EngineError>> + Send + '_>> {
        Box::pin(async move {
            let mut batch = Vec::new();

            // Wait out the window for a first message...
            match tokio::time::timeout(timeout, self.consumer.recv()).await {
                Err(_) => return Ok(batch),
                Ok(Err(e)) => return Err(EngineError::Transport(format!("poll: {e}"))),
                Ok(Ok(message)) => batch.push(Self::to_record(&message)),
            }

            // ...then drain whatever the consumer already buffered.
            loop {
                match tokio::time::timeout(Duration::ZERO, self.consumer.recv()).await {
                    Err(_) => break,
                    Ok(Err(e)) => return Err(EngineError::Transport(format!("poll: {e}"))),
                    Ok(Ok(message)) => batch.push(Self::to_record(&message)),
                }
            }

            Ok(batch)
        })
    }

    fn close(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.consumer.unsubscribe();
        Box::pin(async {})
    }
}
