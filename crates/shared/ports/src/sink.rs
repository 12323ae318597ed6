use crate::error::SinkResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A composed notification ready for dispatch.
///
/// Carries either a rich HTML body or a plain-text one; the sink decides
/// how to render whichever is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub subject: String,
    /// Plain-text body (always present, used as the fallback rendering)
    pub body: String,
    /// Optional rich HTML body
    pub html_body: Option<String>,
}

impl Message {
    pub fn plain(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            html_body: None,
        }
    }

    pub fn html(
        subject: impl Into<String>,
        body: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            html_body: Some(html_body.into()),
        }
    }
}

/// Port for the notification transport.
///
/// Fire-and-forget from the engine's perspective: the engine consumes no
/// acknowledgment beyond the Ok/Err of the send itself.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, message: Message) -> SinkResult<()>;
}
