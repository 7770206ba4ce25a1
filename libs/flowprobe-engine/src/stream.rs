use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use flowprobe_api::record::StreamRecord;

use crate::error::EngineError;

/// One subscribed lifecycle-event stream.
///
/// The consumer session drives this seam; implementations own the broker
/// resources and must release them in `close`.
pub trait EventStream: Send {
    /// Wait up to `timeout` for the next batch of records.
    ///
    /// An empty batch means nothing arrived within the window — not an
    /// error. A transport failure is fatal to the session and is returned
    /// as `Err`.
    fn poll_batch(
        &mut self,
        timeout: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<StreamRecord>, EngineError>> + Send + '_>>;

    /// Release broker-side resources. Idempotent.
    fn close(&mut self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}
