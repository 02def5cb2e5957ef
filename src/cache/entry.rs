//! Dedupe Entry Module
//!
//! Per-key expiry bookkeeping. Timestamps are caller-supplied milliseconds.

// == Dedupe Entry ==
/// Expiry state for a single tracked key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DedupeEntry {
    /// Timestamp (milliseconds) at which the entry goes stale, None = never
    pub expires_at: Option<i64>,
}

impl DedupeEntry {
    // == Constructor ==
    /// Creates an entry touched at `now`.
    ///
    /// A `ttl_ms` of zero or below produces an entry that never expires.
    pub fn new(now: i64, ttl_ms: i64) -> Self {
        Self {
            expires_at: expiry_for(now, ttl_ms),
        }
    }

    // == Refresh ==
    /// Slides the expiry window so it starts at `now`.
    pub fn refresh(&mut self, now: i64, ttl_ms: i64) {
        self.expires_at = expiry_for(now, ttl_ms);
    }

    // == Is Expired ==
    /// Checks if the entry is stale at `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so a
    /// lookup landing exactly on the expiry timestamp is already a miss.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }
}

fn expiry_for(now: i64, ttl_ms: i64) -> Option<i64> {
    (ttl_ms > 0).then(|| now.saturating_add(ttl_ms))
}
