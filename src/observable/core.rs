//! Core observable trait and the extension trait carrying its combinators

use super::map::Map;
use crate::error::ObservableResult;
use crate::observable_configuration::ObservableConfig;
use crate::observer::{AnyObserver, Observer};
use crate::subscription_metrics::{InstrumentedObserver, SubscriptionMetrics};
use std::marker::PhantomData;

/// A push-based producer of notifications.
///
/// `subscribe` drives the whole notification sequence synchronously on the
/// calling thread and returns once `Completed` has been delivered. Every call
/// is an independent traversal of immutable data.
pub trait Observable {
    type Item;
    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>);
}

/// Type-erased observable
pub type BoxedObservable<'a, T> = Box<dyn Observable<Item = T> + 'a>;

impl<O: Observable + ?Sized> Observable for Box<O> {
    type Item = O::Item;

    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>) {
        (**self).subscribe(observer)
    }
}

impl<O: Observable + ?Sized> Observable for &O {
    type Item = O::Item;

    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>) {
        (**self).subscribe(observer)
    }
}

/// Extension trait providing observable combinators and subscription helpers
pub trait ObservableExt: Observable + Sized {
    /// Subscribe with optional callbacks; a missing callback is a no-op
    fn subscribe_with<N, C>(&self, on_next: Option<N>, on_completed: Option<C>)
    where
        N: FnMut(Self::Item),
        C: FnMut(),
    {
        let mut observer = AnyObserver::from_callbacks(on_next, on_completed);
        self.subscribe(&mut observer);
    }

    fn subscribe_next<N>(&self, on_next: N)
    where
        N: FnMut(Self::Item),
    {
        self.subscribe_with(Some(on_next), None::<fn()>);
    }

    fn subscribe_completed<C>(&self, on_completed: C)
    where
        C: FnMut(),
    {
        self.subscribe_with(None::<fn(Self::Item)>, Some(on_completed));
    }

    /// Re-emit every value through `transform`.
    ///
    /// `transform` must be total: a panic inside it unwinds out of
    /// `subscribe` and no further notification is delivered.
    fn map<U, F>(self, transform: F) -> Map<Self, U, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map {
            source: self,
            transform,
            _phantom: PhantomData,
        }
    }

    fn boxed<'a>(self) -> BoxedObservable<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Collect the values of one subscription
    fn collect_vec(&self) -> Vec<Self::Item> {
        let mut values = Vec::new();
        self.subscribe_next(|value| values.push(value));
        values
    }

    /// Subscribe through an instrumented wrapper and return its metrics
    fn subscribe_instrumented<O>(
        &self,
        observer: O,
        config: &ObservableConfig,
    ) -> ObservableResult<SubscriptionMetrics>
    where
        O: Observer<Item = Self::Item>,
    {
        config.validate()?;
        let mut instrumented = InstrumentedObserver::new(observer, config);
        self.subscribe(&mut instrumented);
        Ok(instrumented.finish())
    }
}

impl<T> ObservableExt for T where T: Observable {}
