//! Debounce supersession for autocomplete requests.
//!
//! Each keystroke arms a debounce timer; only the most recently armed
//! request may publish its results. The host owns the actual timer; this
//! type only decides which completion is still current, so a stale response
//! can never overwrite a newer suggestion list.

use std::time::Duration;

use crate::constants::SEARCH_DEBOUNCE_MS;

/// Ticket identifying one armed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Latest-ticket-wins request tracker.
#[derive(Debug, Default)]
pub struct SearchDebouncer {
    latest: u64,
}

impl SearchDebouncer {
    /// Interval the host should wait after a keystroke before firing.
    pub const INTERVAL: Duration = Duration::from_millis(SEARCH_DEBOUNCE_MS);

    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new request, superseding every earlier ticket.
    pub fn arm(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    /// Whether a completion with this ticket may publish its results.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Invalidate every outstanding ticket (component teardown).
    pub fn cancel_all(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut debouncer = SearchDebouncer::new();

        let first = debouncer.arm();
        assert!(debouncer.is_current(first));

        let second = debouncer.arm();
        assert!(!debouncer.is_current(first), "superseded ticket is stale");
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_cancel_all_invalidates_pending() {
        let mut debouncer = SearchDebouncer::new();
        let ticket = debouncer.arm();

        debouncer.cancel_all();
        assert!(!debouncer.is_current(ticket));
    }

    #[test]
    fn test_interval_matches_constant() {
        assert_eq!(SearchDebouncer::INTERVAL, Duration::from_millis(500));
    }
}
