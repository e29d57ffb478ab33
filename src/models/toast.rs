//! Toast notification types.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A single toast message with a unique ID for list keying.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Unique ID for efficient keying in For loops and dismissal.
    pub id: usize,
    pub message: String,
    pub level: ToastLevel,
}

// Global counter for generating unique IDs
static TOAST_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: TOAST_COUNTER.fetch_add(1, Ordering::Relaxed),
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.message == other.message && self.level == other.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors() {
        assert_eq!(Toast::info("hi").level, ToastLevel::Info);
        assert_eq!(Toast::success("ok").level, ToastLevel::Success);
        assert_eq!(Toast::error("no").level, ToastLevel::Error);
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let a = Toast::info("same");
        let b = Toast::info("same");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }
}
