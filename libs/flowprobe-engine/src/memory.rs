use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use flowprobe_api::record::StreamRecord;

use crate::error::EngineError;
use crate::stream::EventStream;

/// In-memory stream — a scripted sequence of poll outcomes.
///
/// Each script entry is what one `poll_batch` call yields: a batch (possibly
/// empty) or a transport error. Once the script runs out, every further poll
/// yields an empty batch.
pub struct MemoryEventStream {
    script: VecDeque<Result<Vec<StreamRecord>, EngineError>>,
    closed: Arc<AtomicBool>,
}

impl MemoryEventStream {
    pub fn new(script: Vec<Result<Vec<StreamRecord>, EngineError>>) -> Self {
        Self {
            script: script.into(),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle that observes whether `close` has been called, usable after
    /// the stream has been moved into a session.
    pub fn closed_flag(&self) -> Arc<AtomicBool> {
        self.closed.clone()
    }
}

impl EventStream for MemoryEventStream {
    fn poll_batch(
        &mut self,
        _timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StreamRecord>, EngineError>> + Send + '_>> {
        let next = self.script.pop_front().unwrap_or_else(|| Ok(Vec::new()));
        Box::pin(async move { next })
    }

    fn close(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.closed.store(true, Ordering::Relaxed);
        Box::pin(async {})
    }
}
