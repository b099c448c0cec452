//! In-process notification bus backed by a tokio broadcast channel.
//!
//! Lets a host UI subscribe to the transient messages the controller
//! emits through the [`Notifier`] port.

use tokio::sync::broadcast;

use crate::ports::{MessageLevel, Notifier};

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: MessageLevel,
    /// Fixed, non-parameterized message code resolved by the host UI.
    pub code: String,
}

/// In-process notifier using a tokio [`broadcast`] channel.
///
/// Showing a message succeeds even when there are no active subscribers
/// (the notification is simply dropped).
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to notifications on this bus.
    ///
    /// Returns a receiver that will get all notifications shown *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Notifier for NotificationBus {
    fn show(&self, level: MessageLevel, code: &str) {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(Notification {
            level,
            code: code.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deliver_notification_to_subscriber() {
        let bus = NotificationBus::new(16);
        let mut rx = bus.subscribe();

        bus.show(MessageLevel::Info, "APPOINTMENT_SERVICE_SAVE_SUCCESS");

        let received = rx.try_recv().unwrap();
        assert_eq!(received.level, MessageLevel::Info);
        assert_eq!(received.code, "APPOINTMENT_SERVICE_SAVE_SUCCESS");
    }

    #[test]
    fn should_deliver_notification_to_multiple_subscribers() {
        let bus = NotificationBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.show(MessageLevel::Error, "INVALID_SERVICE_FORM_ERROR_MESSAGE");

        assert_eq!(rx1.try_recv().unwrap().code, "INVALID_SERVICE_FORM_ERROR_MESSAGE");
        assert_eq!(rx2.try_recv().unwrap().code, "INVALID_SERVICE_FORM_ERROR_MESSAGE");
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = NotificationBus::new(16);
        bus.show(MessageLevel::Info, "APPOINTMENT_SERVICE_SAVE_SUCCESS");
    }

    #[test]
    fn should_not_deliver_notifications_shown_before_subscription() {
        let bus = NotificationBus::new(16);
        bus.show(MessageLevel::Info, "EARLY");

        let mut rx = bus.subscribe();
        bus.show(MessageLevel::Info, "LATE");

        assert_eq!(rx.try_recv().unwrap().code, "LATE");
        assert!(rx.try_recv().is_err());
    }
}
