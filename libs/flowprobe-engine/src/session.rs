use std::time::Duration;

use flowprobe_api::counters::EventCounters;
use flowprobe_api::event::classify;

use crate::error::EngineError;
use crate::stream::EventStream;

/// Bounded consumer loop over one subscribed stream.
///
/// Runs a fixed number of poll cycles — one per launched workflow — and
/// tallies matching start/end events. Consuming the session on `run` makes
/// the Subscribed → Polling → Closed progression one-way: the stream is
/// closed on every exit path, including a transport abort, and cannot be
/// polled again.
pub struct ConsumerSession<S: EventStream> {
    stream: S,
    target_process_id: String,
}

impl<S: EventStream> ConsumerSession<S> {
    pub fn new(stream: S, target_process_id: impl Into<String>) -> Self {
        Self {
            stream,
            target_process_id: target_process_id.into(),
        }
    }

    /// Drive the poll loop and return the final counters.
    ///
    /// Transport errors abort immediately and propagate; a poll that yields
    /// no records is a normal outcome, since events may not have been
    /// produced yet.
    pub async fn run(
        mut self,
        poll_iterations: u32,
        poll_timeout: Duration,
    ) -> Result<EventCounters, EngineError> {
        let result = self.poll_loop(poll_iterations, poll_timeout).await;
        self.stream.close().await;
        result
    }

    async fn poll_loop(
        &mut self,
        poll_iterations: u32,
        poll_timeout: Duration,
    ) -> Result<EventCounters, EngineError> {
        let mut counters = EventCounters::new();
        for iteration in 0..poll_iterations {
            let batch = self.stream.poll_batch(poll_timeout).await?;
            if batch.is_empty() {
                tracing::debug!(iteration, "no records");
                continue;
            }
            tracing::debug!(iteration, records = batch.len(), "received batch");
            for record in &batch {
                match classify(record) {
                    Ok(event) => counters.record(&event, &self.target_process_id),
                    Err(e) => {
                        // Malformed records are skipped, never fatal.
                        tracing::warn!(offset = record.offset, error = %e, "skipping unclassifiable record");
                    }
                }
            }
        }
        Ok(counters)
    }
}
