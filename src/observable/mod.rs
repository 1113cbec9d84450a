//! Observable abstraction and its concrete variants
//!
//! Constructors build `Just` and `Sequence` values, `map` wraps any observable
//! in a `Map`. Subscribing drives the whole chain synchronously.

pub mod core;
pub mod constructors;
pub mod map;

// Re-export core types
pub use self::core::{BoxedObservable, Observable, ObservableExt};

// Re-export constructors
pub use constructors::{empty, from_sequence, just, of, Just, Sequence};

pub use map::Map;
