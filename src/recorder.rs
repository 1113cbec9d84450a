//! Recording observer and notification grammar checks
//!
//! `Recorder` keeps every notification it receives so a subscription can be
//! asserted on after the fact. `validate_notifications` checks that a recorded
//! sequence is `Next* Completed`.

use crate::error::{ObservableError, ObservableResult};
use crate::notification::Notification;
use crate::observer::Observer;
use serde::Serialize;

/// Observer that stores every notification in delivery order
#[derive(Debug, Clone, PartialEq)]
pub struct Recorder<T> {
    notifications: Vec<Notification<T>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
        }
    }
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification<T>] {
        &self.notifications
    }

    pub fn into_notifications(self) -> Vec<Notification<T>> {
        self.notifications
    }

    /// Values of the recorded `Next` notifications
    pub fn values(&self) -> Vec<&T> {
        self.notifications.iter().filter_map(Notification::value).collect()
    }

    pub fn completed_count(&self) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.is_completed())
            .count()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_count() > 0
    }

    pub fn validate(&self) -> ObservableResult<()> {
        validate_notifications(&self.notifications)
    }

    pub fn to_json(&self) -> ObservableResult<String>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(&self.notifications)?)
    }
}

impl<T> Observer for Recorder<T> {
    type Item = T;

    fn on(&mut self, notification: Notification<T>) {
        self.notifications.push(notification);
    }
}

/// Check that `notifications` is zero or more `Next` followed by one `Completed`
pub fn validate_notifications<T>(notifications: &[Notification<T>]) -> ObservableResult<()> {
    let mut completed = false;
    for (index, notification) in notifications.iter().enumerate() {
        match (notification, completed) {
            (Notification::Next(_), true) => {
                return Err(ObservableError::NextAfterCompleted { index })
            }
            (Notification::Completed, true) => {
                return Err(ObservableError::DuplicateCompleted { index })
            }
            (Notification::Completed, false) => completed = true,
            (Notification::Next(_), false) => {}
        }
    }
    if completed {
        Ok(())
    } else {
        Err(ObservableError::MissingCompleted)
    }
}
