use async_trait::async_trait;
use sentinel_ports::{Message, NotificationSink, SinkError, SinkResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Notification sink that records every message it accepts.
///
/// `reject_next(n)` makes the next `n` sends fail, which is how tests
/// drive the engine down the fallback and log-only paths.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<Message>>,
    reject_remaining: AtomicUsize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the next `n` send attempts.
    pub fn reject_next(&self, n: usize) {
        self.reject_remaining.store(n, Ordering::SeqCst);
    }

    /// All messages accepted so far.
    pub async fn sent(&self) -> Vec<Message> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, message: Message) -> SinkResult<()> {
        let remaining = self.reject_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.reject_remaining.store(remaining - 1, Ordering::SeqCst);
            return Err(SinkError::Send("injected send failure".to_string()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}
