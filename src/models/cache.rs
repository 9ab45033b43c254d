use chrono::{DateTime, Duration, Utc};

/// A cached value with an absolute expiry. Used for the remote template
/// catalog, which changes rarely and is rate-limited upstream.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl_seconds: i64) -> Self {
        Self {
            value,
            expires_at: Utc::now() + Duration::seconds(ttl_seconds),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_expires_after_ttl() {
        let fresh = CacheEntry::new(1, 60);
        assert!(!fresh.is_expired());

        let stale = CacheEntry::new(1, -1);
        assert!(stale.is_expired());
    }
}
