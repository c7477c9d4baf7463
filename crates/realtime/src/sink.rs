//! Outbound notification channel abstraction.

use crate::message::TickNotification;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Error type for notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The host side of the channel is gone
    #[error("host channel closed")]
    Closed,
}

/// Destination for tick notifications.
///
/// The reporter treats delivery as fire-and-forget: a failed delivery is
/// logged and the cycle continues.
#[async_trait]
pub trait HostSink: Send + Sync {
    /// Deliver one notification to the host.
    async fn deliver(&self, notification: TickNotification) -> Result<(), SinkError>;
}

/// A [`HostSink`] backed by an unbounded in-process channel.
///
/// Unbounded so delivery never blocks the tick cycle; a host that stops
/// draining only costs memory, never timing.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<TickNotification>,
}

impl ChannelSink {
    /// Create a sink and the receiver the host reads from.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TickNotification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl HostSink for ChannelSink {
    async fn deliver(&self, notification: TickNotification) -> Result<(), SinkError> {
        self.tx.send(notification).map_err(|_| SinkError::Closed)
    }
}
