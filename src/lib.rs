//! rs2-observable - a minimal push-based observable library
//!
//! Producers emit `Next` values followed by one `Completed`; observers react
//! to each notification. Everything runs synchronously on the subscribing
//! thread.
//!
//! ```
//! use rs2_observable::*;
//!
//! let mut output = Vec::new();
//! of![1, 2, 3]
//!     .map(|x| x * 10)
//!     .subscribe_next(|x| output.push(x));
//! assert_eq!(output, vec![10, 20, 30]);
//! ```

pub mod error;
pub mod notification;
pub mod observer;
pub mod sink;
pub mod observable;

pub mod observable_configuration;
pub mod subscription_metrics;
pub mod recorder;

pub use error::{ObservableError, ObservableResult};
pub use notification::Notification;
pub use observer::{AnyObserver, Observer};
pub use sink::Sink;
pub use observable::{
    empty, from_sequence, just, of, BoxedObservable, Just, Map, Observable, ObservableExt, Sequence,
};
pub use observable_configuration::ObservableConfig;
pub use subscription_metrics::{InstrumentedObserver, SubscriptionMetrics};
pub use recorder::{validate_notifications, Recorder};

/// Create a `Sequence` observable from a list of elements, in call order
///
/// ```
/// use rs2_observable::*;
///
/// assert_eq!(of!["a", "b"].collect_vec(), vec!["a", "b"]);
///
/// let nothing: Sequence<Vec<i32>, i32> = of![];
/// assert!(nothing.collect_vec().is_empty());
/// ```
#[macro_export]
macro_rules! of {
    () => {
        $crate::observable::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::observable::of(::std::vec![$($element),+])
    };
}
