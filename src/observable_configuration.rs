//! Configuration for instrumented subscriptions

use crate::error::{ObservableError, ObservableResult};
use log::Level;

/// Controls logging and metrics for `subscribe_instrumented`
#[derive(Debug, Clone)]
pub struct ObservableConfig {
    /// Label attached to log lines
    pub name: Option<String>,
    pub log_notifications: bool,
    pub log_level: Level,
    pub collect_metrics: bool,
}

impl Default for ObservableConfig {
    fn default() -> Self {
        Self {
            name: None,
            log_notifications: false,
            log_level: Level::Debug,
            collect_metrics: true,
        }
    }
}

impl ObservableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn log_notifications(mut self, enabled: bool) -> Self {
        self.log_notifications = enabled;
        self
    }

    pub fn log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn collect_metrics(mut self, enabled: bool) -> Self {
        self.collect_metrics = enabled;
        self
    }

    /// Name used in log lines
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("observable")
    }

    /// Validate the configuration
    pub fn validate(&self) -> ObservableResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ObservableError::InvalidConfig(
                    "Name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
