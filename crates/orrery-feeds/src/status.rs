use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Connection state of one feed, surfaced as text next to its panel.
/// The simulation core never reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Connected,
    /// The feed gave up within its bounded wait; panels show local data.
    Offline,
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Connecting => write!(f, "connecting…"),
            FeedStatus::Connected => write!(f, "connected"),
            FeedStatus::Offline => write!(f, "offline (simulated data)"),
        }
    }
}

/// Lock-free status slot shared between a feed worker and the UI thread.
pub struct StatusCell(AtomicU8);

impl StatusCell {
    pub fn new(status: FeedStatus) -> Self {
        Self(AtomicU8::new(status as u8))
    }

    pub fn set(&self, status: FeedStatus) {
        self.0.store(status as u8, Ordering::Release);
    }

    pub fn get(&self) -> FeedStatus {
        match self.0.load(Ordering::Acquire) {
            0 => FeedStatus::Connecting,
            1 => FeedStatus::Connected,
            _ => FeedStatus::Offline,
        }
    }
}

impl Default for StatusCell {
    fn default() -> Self {
        Self::new(FeedStatus::Connecting)
    }
}
