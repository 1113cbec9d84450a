//! Subscription metrics and the instrumented observer that collects them

use crate::notification::Notification;
use crate::observable_configuration::ObservableConfig;
use crate::observer::Observer;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Metrics collected for one subscription
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionMetrics {
    pub next_count: u64,
    pub completed: bool,
    pub processing_time: Duration,
    #[serde(skip)]
    pub start_time: Option<Instant>,
}

impl SubscriptionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    pub fn record_next(&mut self) {
        self.next_count += 1;
    }

    pub fn record_completed(&mut self) {
        self.completed = true;
    }

    pub fn finalize(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.processing_time = start.elapsed();
        }
    }

    pub fn throughput_per_sec(&self) -> f64 {
        if self.processing_time.as_secs_f64() > 0.0 {
            self.next_count as f64 / self.processing_time.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Wraps an observer, counting and optionally logging what passes through
pub struct InstrumentedObserver<'c, O> {
    inner: O,
    config: &'c ObservableConfig,
    metrics: SubscriptionMetrics,
    delivered: u64,
    completed: bool,
}

impl<'c, O: Observer> InstrumentedObserver<'c, O> {
    pub fn new(inner: O, config: &'c ObservableConfig) -> Self {
        Self {
            inner,
            config,
            metrics: SubscriptionMetrics::new(),
            delivered: 0,
            completed: false,
        }
    }

    pub fn metrics(&self) -> &SubscriptionMetrics {
        &self.metrics
    }

    /// `Next` notifications seen so far, counted even with metrics disabled
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Stop the clock and hand back the collected metrics
    pub fn finish(mut self) -> SubscriptionMetrics {
        self.metrics.finalize();
        log::debug!(
            "[{}] subscription finished: {} next, completed={}, took {:?}",
            self.config.label(),
            self.metrics.next_count,
            self.metrics.completed,
            self.metrics.processing_time
        );
        self.metrics
    }
}

impl<O: Observer> Observer for InstrumentedObserver<'_, O> {
    type Item = O::Item;

    fn on(&mut self, notification: Notification<Self::Item>) {
        if self.completed {
            log::warn!(
                "[{}] notification received after completion",
                self.config.label()
            );
        }
        self.completed |= notification.is_completed();
        if notification.is_next() {
            self.delivered += 1;
        }
        if self.config.collect_metrics {
            match notification {
                Notification::Next(_) => self.metrics.record_next(),
                Notification::Completed => self.metrics.record_completed(),
            }
        }
        if self.config.log_notifications {
            match notification {
                Notification::Next(_) => log::log!(
                    self.config.log_level,
                    "[{}] next #{}",
                    self.config.label(),
                    self.delivered
                ),
                Notification::Completed => {
                    log::log!(self.config.log_level, "[{}] completed", self.config.label())
                }
            }
        }
        self.inner.on(notification);
    }
}
