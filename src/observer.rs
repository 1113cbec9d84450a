//! Observer capability and the closure-backed `AnyObserver` adapter

use crate::notification::Notification;

/// Something that can receive notifications from an observable.
///
/// Calls are synchronous and sequential: each `on` returns before the next
/// one is made. The trait is object safe so observables can accept
/// `&mut dyn Observer<Item = T>`.
pub trait Observer {
    type Item;
    fn on(&mut self, notification: Notification<Self::Item>);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    type Item = O::Item;

    fn on(&mut self, notification: Notification<Self::Item>) {
        (**self).on(notification)
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    type Item = O::Item;

    fn on(&mut self, notification: Notification<Self::Item>) {
        (**self).on(notification)
    }
}

/// Type-erased observer backed by a notification handler closure
pub struct AnyObserver<'a, T> {
    handler: Box<dyn FnMut(Notification<T>) + 'a>,
}

impl<'a, T> AnyObserver<'a, T> {
    /// Create an observer that passes every notification to `handler`
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(Notification<T>) + 'a,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Create an observer from separate callbacks.
    ///
    /// A missing callback turns the matching notification into a no-op.
    pub fn from_callbacks<N, C>(on_next: Option<N>, on_completed: Option<C>) -> Self
    where
        N: FnMut(T) + 'a,
        C: FnMut() + 'a,
    {
        let mut on_next = on_next;
        let mut on_completed = on_completed;
        Self::new(move |notification| match notification {
            Notification::Next(value) => {
                if let Some(f) = on_next.as_mut() {
                    f(value);
                }
            }
            Notification::Completed => {
                if let Some(f) = on_completed.as_mut() {
                    f();
                }
            }
        })
    }
}

impl<T> Observer for AnyObserver<'_, T> {
    type Item = T;

    fn on(&mut self, notification: Notification<T>) {
        (self.handler)(notification)
    }
}

impl<T> std::fmt::Debug for AnyObserver<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyObserver")
            .field("handler", &"FnMut(Notification<T>)")
            .finish()
    }
}
