//! Notification fan-out to the front end.

use mediminder_core::Notification;
use tokio::sync::broadcast;
use tracing::debug;

/// Broadcasts [`Notification`]s to any number of subscribers.
///
/// Sending with nobody listening drops the notification.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    /// Create a notifier and its first subscriber.
    pub fn new(capacity: usize) -> (Self, broadcast::Receiver<Notification>) {
        let (tx, rx) = broadcast::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.send(notification) {
            debug!(notification = ?e.0, "No notification subscribers");
        }
    }
}
