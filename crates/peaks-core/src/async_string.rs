//! One-shot background string producer
//!
//! The producer sleeps on a worker thread, then hands a fixed string to the
//! completion callback exactly once. There is no cancellation: once
//! dispatched, the worker always runs to the end of its delay.
//!
//! Callers that need the value synchronously should wait on a channel with a
//! timeout rather than polling:
//!
//! ```
//! use std::sync::mpsc;
//! use std::time::Duration;
//! use peaks_core::async_string::AsyncStringProducer;
//!
//! let producer = AsyncStringProducer::default().with_delay(Duration::from_millis(10));
//! let (tx, rx) = mpsc::channel();
//! producer.produce_string(Some(Box::new(move |value| {
//!     let _ = tx.send(value);
//! })));
//!
//! let value = rx.recv_timeout(Duration::from_secs(5)).unwrap();
//! assert_eq!(value, "文字列A");
//! ```

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Delay before the callback fires
pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

/// Value handed to the callback
pub const DEFAULT_VALUE: &str = "文字列A";

/// Callback invoked with the produced string
pub type Completion = Box<dyn FnOnce(String) + Send + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsyncStringProducer {
    delay: Duration,
    value: String,
}

impl Default for AsyncStringProducer {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            value: DEFAULT_VALUE.to_string(),
        }
    }
}

impl AsyncStringProducer {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Dispatch the work to a background thread and return immediately
    ///
    /// With `None` the delay still elapses on the worker but nothing is
    /// delivered. The returned handle may be joined or dropped; dropping
    /// it does not stop the worker.
    pub fn produce_string(&self, completion: Option<Completion>) -> JoinHandle<()> {
        let delay = self.delay;
        let value = self.value.clone();
        tracing::debug!(
            op = "produce_string",
            event = "dispatch",
            delay_ms = delay.as_millis() as u64,
            has_completion = completion.is_some(),
        );

        thread::spawn(move || {
            thread::sleep(delay);
            match completion {
                Some(completion) => {
                    tracing::debug!(op = "produce_string", event = "complete");
                    completion(value);
                }
                None => {
                    tracing::debug!(op = "produce_string", event = "complete_unobserved");
                }
            }
        })
    }

    /// Dispatch and return a receiver that yields the value once
    pub fn produce_string_channel(&self) -> Receiver<String> {
        let (tx, rx) = mpsc::channel();
        self.produce_string(Some(Box::new(move |value| {
            // receiver dropped means nobody is waiting any more
            let _ = tx.send(value);
        })));
        rx
    }
}

/// Run the default producer (3 s delay, fixed value)
pub fn produce_string(completion: Option<Completion>) -> JoinHandle<()> {
    AsyncStringProducer::default().produce_string(completion)
}
