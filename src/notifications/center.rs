//! In-process notice queue.

use super::models::{Notice, NoticeLevel};
use std::sync::Mutex;
use tracing::debug;

/// Collects notices until the presentation layer drains them.
#[derive(Default)]
pub struct NotificationCenter {
    notices: Mutex<Vec<Notice>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    fn push(&self, level: NoticeLevel, message: String) {
        debug!("notice [{:?}] {}", level, message);
        self.notices.lock().unwrap().push(Notice {
            level,
            message,
            created_at: chrono::Utc::now().timestamp(),
        });
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_notices_in_order() {
        let center = NotificationCenter::new();
        center.success("first");
        center.error("second");

        let notices = center.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(notices[0].message, "first");
        assert_eq!(notices[1].level, NoticeLevel::Error);
        assert_eq!(notices[1].message, "second");
    }

    #[test]
    fn test_drain_empties_the_center() {
        let center = NotificationCenter::new();
        center.success("only once");

        assert_eq!(center.drain().len(), 1);
        assert!(center.drain().is_empty());
    }
}
