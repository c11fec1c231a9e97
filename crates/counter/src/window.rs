use chrono::{Duration, Utc};

/// Unix-second bounds of one aggregation cycle, computed once when the
/// cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub oldest: i64,
    pub latest: i64,
}

impl ActivityWindow {
    pub fn last_days(days: i64) -> Self {
        let now = Utc::now();
        Self {
            oldest: (now - Duration::days(days)).timestamp(),
            latest: now.timestamp(),
        }
    }

    /// Channel `updated` stamps are epoch milliseconds; a channel is in
    /// the window when it changed after `oldest`.
    pub fn includes_update_ms(&self, updated_ms: i64) -> bool {
        updated_ms / 1000 > self.oldest
    }
}
