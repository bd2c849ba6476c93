//! Bounds on the two structures that would otherwise grow with every run.

use chrono::Duration;

/// Default ChangeLog capacity.
pub const DEFAULT_CHANGE_LOG_CAP: usize = 100;

/// Default RemovedEvents retention in days.
pub const DEFAULT_REMOVED_RETENTION_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Maximum ChangeLog length; oldest entries are evicted first
    pub change_log_cap: usize,
    /// Archived removals older than this are purged at the start of a run
    pub removed_retention: Duration,
}

impl RetentionPolicy {
    pub fn new(change_log_cap: usize, removed_retention_days: i64) -> Self {
        Self {
            change_log_cap,
            removed_retention: Duration::days(removed_retention_days),
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CHANGE_LOG_CAP, DEFAULT_REMOVED_RETENTION_DAYS)
    }
}
