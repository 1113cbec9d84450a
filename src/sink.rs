//! Forwarding shim between a producer and the observer it serves

use crate::notification::Notification;
use crate::observer::Observer;

/// Binds one observer and forwards notifications to it, in order, unbuffered.
pub struct Sink<O> {
    observer: O,
}

impl<O: Observer> Sink<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    pub fn forward_on(&mut self, notification: Notification<O::Item>) {
        log::trace!(
            "Sink forwarding {}",
            if notification.is_next() { "next" } else { "completed" }
        );
        self.observer.on(notification);
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
