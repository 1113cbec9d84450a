//! Value-transforming observable
use super::core::Observable;
use crate::notification::Notification;
use crate::observer::Observer;
use crate::sink::Sink;
use std::marker::PhantomData;

/// Re-emits each upstream value passed through `transform`.
///
/// Created by [`ObservableExt::map`](super::ObservableExt::map).
pub struct Map<S, U, F> {
    pub(crate) source: S,
    pub(crate) transform: F,
    pub(crate) _phantom: PhantomData<U>,
}

impl<S, U, F> Observable for Map<S, U, F>
where
    S: Observable,
    F: Fn(S::Item) -> U,
{
    type Item = U;

    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>) {
        let mut sink: MapSink<'_, S::Item, F, _> = MapSink::new(&self.transform, observer);
        self.source.subscribe(&mut sink);
    }
}

impl<S: Clone, U, F: Clone> Clone for Map<S, U, F> {
    fn clone(&self) -> Self {
        Map {
            source: self.source.clone(),
            transform: self.transform.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S: std::fmt::Debug, U, F> std::fmt::Debug for Map<S, U, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .field("transform", &"Fn(T) -> U")
            .finish()
    }
}

/// Upstream observer that transforms values before forwarding them downstream
struct MapSink<'t, T, F, O> {
    transform: &'t F,
    sink: Sink<O>,
    _phantom: PhantomData<fn(T)>,
}

impl<'t, T, F, O: Observer> MapSink<'t, T, F, O> {
    fn new(transform: &'t F, observer: O) -> Self {
        Self {
            transform,
            sink: Sink::new(observer),
            _phantom: PhantomData,
        }
    }
}

impl<T, U, F, O> Observer for MapSink<'_, T, F, O>
where
    F: Fn(T) -> U,
    O: Observer<Item = U>,
{
    type Item = T;

    fn on(&mut self, notification: Notification<T>) {
        match notification {
            Notification::Next(value) => {
                let mapped = (self.transform)(value);
                self.sink.forward_on(Notification::Next(mapped));
            }
            Notification::Completed => self.sink.forward_on(Notification::Completed),
        }
    }
}
