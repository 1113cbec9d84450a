//! Observable constructors: just, of, from_sequence, empty
use super::core::Observable;
use crate::notification::Notification;
use crate::observer::Observer;
use crate::sink::Sink;
use std::marker::PhantomData;

// ================================
// Single Value
// ================================

/// Emits one value, then completes
#[derive(Debug, Clone)]
pub struct Just<T> {
    pub(crate) element: T,
}

impl<T: Clone> Observable for Just<T> {
    type Item = T;

    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>) {
        observer.on(Notification::Next(self.element.clone()));
        observer.on(Notification::Completed);
    }
}

// ================================
// Fixed Sequence
// ================================

/// Emits every element of a captured, finite sequence in order, then completes.
///
/// Elements are borrowed from the captured collection and cloned one at a
/// time, so subscribing never copies the collection itself.
pub struct Sequence<S, T> {
    pub(crate) elements: S,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<S, T> Sequence<S, T> {
    pub fn elements(&self) -> &S {
        &self.elements
    }
}

impl<S: Clone, T> Clone for Sequence<S, T> {
    fn clone(&self) -> Self {
        Sequence {
            elements: self.elements.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S: std::fmt::Debug, T> std::fmt::Debug for Sequence<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequence")
            .field("elements", &self.elements)
            .finish()
    }
}

impl<S, T> Observable for Sequence<S, T>
where
    for<'a> &'a S: IntoIterator<Item = &'a T>,
    T: Clone,
{
    type Item = T;

    fn subscribe(&self, observer: &mut dyn Observer<Item = Self::Item>) {
        SequenceSink::new(self, observer).run();
    }
}

struct SequenceSink<'p, S, T, O> {
    parent: &'p Sequence<S, T>,
    sink: Sink<O>,
}

impl<'p, S, T, O> SequenceSink<'p, S, T, O>
where
    for<'a> &'a S: IntoIterator<Item = &'a T>,
    T: Clone,
    O: Observer<Item = T>,
{
    fn new(parent: &'p Sequence<S, T>, observer: O) -> Self {
        Self {
            parent,
            sink: Sink::new(observer),
        }
    }

    fn run(mut self) {
        for element in &self.parent.elements {
            self.sink.forward_on(Notification::Next(element.clone()));
        }
        self.sink.forward_on(Notification::Completed);
    }
}

// ================================
// Constructor Functions
// ================================

/// Create an observable that emits a single value
pub fn just<T>(element: T) -> Just<T> {
    Just { element }
}

/// Create an observable from the given elements, captured in order.
///
/// `elements` must be finite; it is drained into a `Vec` here. See also the
/// variadic [`of!`](crate::of!) macro.
pub fn of<I>(elements: I) -> Sequence<Vec<I::Item>, I::Item>
where
    I: IntoIterator,
{
    Sequence {
        elements: elements.into_iter().collect(),
        _phantom: PhantomData,
    }
}

/// Create an observable over a collection iterated by reference
/// (`Vec`, arrays, `VecDeque`, ...).
///
/// The collection must yield a finite number of elements: `Completed` is only
/// delivered after the last one. Use [`of`] for ranges and other iterators.
pub fn from_sequence<S, T>(elements: S) -> Sequence<S, T>
where
    for<'a> &'a S: IntoIterator<Item = &'a T>,
{
    Sequence {
        elements,
        _phantom: PhantomData,
    }
}

/// Create an observable that only completes
pub fn empty<T>() -> Sequence<Vec<T>, T> {
    Sequence {
        elements: Vec::new(),
        _phantom: PhantomData,
    }
}
