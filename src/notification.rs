//! Notification model for observables
//!
//! A subscription delivers zero or more `Next` values followed by exactly one
//! `Completed`. There is no error channel.

use serde::{Deserialize, Serialize};

/// A single message pushed from an observable to an observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification<T> {
    /// The next value of the sequence
    Next(T),
    /// Terminal notification, nothing follows it
    Completed,
}

impl<T> Notification<T> {
    pub fn is_next(&self) -> bool {
        matches!(self, Notification::Next(_))
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Notification::Completed)
    }

    /// Borrow the carried value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Notification::Next(value) => Some(value),
            Notification::Completed => None,
        }
    }

    /// Take the carried value, if any
    pub fn into_value(self) -> Option<T> {
        match self {
            Notification::Next(value) => Some(value),
            Notification::Completed => None,
        }
    }

    /// Transform the carried value; `Completed` passes through untouched
    pub fn map<U, F>(self, f: F) -> Notification<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Notification::Next(value) => Notification::Next(f(value)),
            Notification::Completed => Notification::Completed,
        }
    }
}
