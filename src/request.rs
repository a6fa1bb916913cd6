/// Latest-wins bookkeeping for screen data.
///
/// Every load issues a token from a monotonically increasing counter. A
/// response is applied only if its token is still the newest one issued, so a
/// slow response for an old date or team can never overwrite a newer one.
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues tokens and answers whether a token is still current
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

/// View state for one screen: the value for the most recently requested key
#[derive(Debug)]
pub struct LatestSlot<K, V> {
    tracker: RequestTracker,
    pending: Option<(RequestToken, K)>,
    current: Option<(K, V)>,
}

impl<K, V> Default for LatestSlot<K, V> {
    fn default() -> Self {
        Self {
            tracker: RequestTracker::new(),
            pending: None,
            current: None,
        }
    }
}

impl<K, V> LatestSlot<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load for `key`; any earlier in-flight load becomes stale
    pub fn begin(&mut self, key: K) -> RequestToken {
        let token = self.tracker.issue();
        self.pending = Some((token, key));
        token
    }

    /// Apply a finished load. Returns false (and drops `value`) if stale.
    pub fn complete(&mut self, token: RequestToken, value: V) -> bool {
        if !self.tracker.is_current(token) {
            return false;
        }
        match self.pending.take() {
            Some((pending_token, key)) if pending_token == token => {
                self.current = Some((key, value));
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current(&self) -> Option<(&K, &V)> {
        self.current.as_ref().map(|(k, v)| (k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tokens_increase() {
        let tracker = RequestTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();
        assert!(b > a);
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut slot: LatestSlot<String, u32> = LatestSlot::new();
        let old = slot.begin("2024-11-20".to_string());
        let new = slot.begin("2024-11-21".to_string());

        assert!(slot.complete(new, 21));
        assert!(!slot.complete(old, 20));

        let (key, value) = slot.current().unwrap();
        assert_eq!(key, "2024-11-21");
        assert_eq!(*value, 21);
        assert!(!slot.is_loading());
    }

    #[test]
    fn test_old_response_before_new_one_is_also_discarded() {
        let mut slot: LatestSlot<&str, u32> = LatestSlot::new();
        let old = slot.begin("BOS");
        let new = slot.begin("TOR");

        assert!(!slot.complete(old, 1));
        assert!(slot.current().is_none());
        assert!(slot.is_loading());
        assert!(slot.complete(new, 2));
        assert_eq!(slot.current(), Some((&"TOR", &2)));
    }

    #[test]
    fn test_token_cannot_be_applied_twice() {
        let mut slot: LatestSlot<u32, &str> = LatestSlot::new();
        let token = slot.begin(1);
        assert!(slot.complete(token, "first"));
        assert!(!slot.complete(token, "again"));
        assert_eq!(slot.current(), Some((&1, &"first")));
    }

    #[test]
    fn test_slot_key_needs_no_clone() {
        #[derive(Debug)]
        struct TeamKey(&'static str);

        let mut slot: LatestSlot<TeamKey, u32> = LatestSlot::default();
        let token = slot.begin(TeamKey("BOS"));
        assert!(slot.complete(token, 7));
        let (key, value) = slot.current().unwrap();
        assert_eq!(key.0, "BOS");
        assert_eq!(*value, 7);
    }

    #[tokio::test]
    async fn test_slow_stale_fetch_does_not_win() {
        let mut slot: LatestSlot<&str, &str> = LatestSlot::new();
        let slow_token = slot.begin("monday");
        let fast_token = slot.begin("tuesday");

        let slow = async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            (slow_token, "monday games")
        };
        let fast = async { (fast_token, "tuesday games") };

        let (fast_done, slow_done) = tokio::join!(fast, slow);
        slot.complete(fast_done.0, fast_done.1);
        slot.complete(slow_done.0, slow_done.1);

        assert_eq!(slot.current(), Some((&"tuesday", &"tuesday games")));
    }
}
