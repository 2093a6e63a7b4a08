use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{ApiError, Notification, NotificationLevel};

const MAX_QUEUED: usize = 8;

/// Shared alert surface: queues transient popups for every screen.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
    offline: bool,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(4))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
            offline: false,
        }
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        if self.queue.len() >= MAX_QUEUED {
            self.queue.pop_front();
        }
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(notification);
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, title, message);
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Reports a failed API call.
    ///
    /// Transport failures, and anything reported while offline, are logged only.
    /// Returns whether a popup was queued.
    pub fn report_error(&mut self, title: impl Into<String>, error: &ApiError) -> bool {
        let title = title.into();
        if self.offline || error.is_network_error() {
            warn!(
                title = %title,
                error = %error,
                offline = self.offline,
                "Suppressed network error"
            );
            return false;
        }
        self.error(title, error.to_string());
        true
    }

    /// Records connectivity as observed from the last request.
    pub fn set_offline(&mut self, offline: bool) {
        if self.offline != offline {
            debug!(offline, "Connectivity changed");
        }
        self.offline = offline;
    }

    #[must_use]
    pub const fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn tick(&mut self) {
        if let Some(front) = self.queue.front_mut() {
            front.mark_displayed();
            if front.is_expired() {
                self.queue.pop_front();
                if let Some(next) = self.queue.front_mut() {
                    next.mark_displayed();
                }
            }
        }
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_notification_flow() {
        let mut manager = NotificationManager::default();

        manager.success("Saved", "Breed created");
        assert!(manager.current_notification().is_some());

        manager.tick();
        assert!(manager.current_notification().is_some());
    }

    #[test]
    fn test_queueing() {
        let mut manager = NotificationManager::default();
        manager.info("1", "First");
        manager.info("2", "Second");

        assert_eq!(manager.current_notification().unwrap().title, "1");

        manager.tick();

        manager.queue.front_mut().unwrap().displayed_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());

        manager.tick();

        assert_eq!(manager.current_notification().unwrap().title, "2");

        let second = manager.current_notification().unwrap();
        assert!(second.displayed_at.unwrap().elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_application_error_is_shown() {
        let mut manager = NotificationManager::default();
        assert!(manager.report_error("Error", &ApiError::rejected("Breed already exists")));
        assert_eq!(manager.len(), 1);
        assert_eq!(
            manager.current_notification().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[test]
    fn test_network_error_is_suppressed() {
        let mut manager = NotificationManager::default();
        assert!(!manager.report_error("Error", &ApiError::network("connection refused")));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_offline_suppresses_everything() {
        let mut manager = NotificationManager::default();
        manager.set_offline(true);
        assert!(!manager.report_error("Error", &ApiError::rejected("Not found")));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut manager = NotificationManager::default();
        for i in 0..20 {
            manager.info(i.to_string(), "msg");
        }
        assert_eq!(manager.len(), MAX_QUEUED);
        assert_eq!(manager.current_notification().unwrap().title, "12");
    }
}
