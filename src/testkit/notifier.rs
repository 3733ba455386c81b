//! Mock [`Notifier`] that records messages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::domain::notify_error;
use crate::error::Result;
use crate::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
///
/// Every call is recorded in [`messages`](RecordingNotifier::messages),
/// including the ones made to fail; [`delivered`](RecordingNotifier::delivered)
/// holds only the successful ones.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    delivered: Arc<Mutex<Vec<String>>>,
    failures: Arc<AtomicUsize>,
    failing_calls: Arc<Mutex<Vec<usize>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` deliveries fail.
    pub fn fail_next(&self, n: usize) {
        self.failures.store(n, Ordering::SeqCst);
    }

    /// Make the `n`-th call (1-based, counting every call) fail.
    pub fn fail_call(&self, n: usize) {
        self.failing_calls.lock().expect("lock failing calls").push(n);
    }

    /// Messages that were accepted, in call order.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.lock().expect("lock delivered messages").clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        let call = {
            let mut messages = self.messages.lock().expect("lock notifier messages");
            messages.push(text.to_string());
            messages.len()
        };

        let scheduled = self
            .failing_calls
            .lock()
            .expect("lock failing calls")
            .contains(&call);
        let should_fail = scheduled
            || self
                .failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
        if should_fail {
            return Err(notify_error());
        }

        self.delivered
            .lock()
            .expect("lock delivered messages")
            .push(text.to_string());
        Ok(())
    }
}
