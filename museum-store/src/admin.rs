//! Admin-mode activation.
//!
//! Editing controls are hidden behind two activation paths:
//! - a URL flag (`?admin=1`) checked once at page load, and
//! - a secret gesture: seven taps on the footer within a rolling
//!   three-second window.
//!
//! Neither path is a security boundary; admin mode only decides whether
//! the UI renders mutation controls. Once unlocked, a session stays
//! unlocked — nothing here ever clears the flag.

use std::time::{Duration, Instant};

/// Taps required to unlock.
pub const TAP_THRESHOLD: u32 = 7;

/// A tap arriving later than this after the previous one restarts the count.
pub const TAP_WINDOW: Duration = Duration::from_secs(3);

/// Returns true when a page-load query string carries the admin flag
/// (`admin=1`). Checked once per load by the host; any other value of
/// the parameter, or its absence, leaves the gate closed.
#[must_use]
pub fn admin_query_unlocks(query: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "admin=1")
}

/// The secret-gesture counter.
///
/// Each tap refreshes the window; the window timer is never stacked. A
/// tap arriving more than [`TAP_WINDOW`] after the previous one starts a
/// new count at 1. The tap that reaches [`TAP_THRESHOLD`] returns `true`
/// and resets the count to 0.
///
/// The machine takes explicit [`Instant`]s so tests can replay exact
/// timings; it never touches the store itself. The caller flips the
/// store's admin flag when a tap reports an unlock.
#[derive(Debug, Clone)]
pub struct TapUnlock {
    threshold: u32,
    window: Duration,
    count: u32,
    last_tap: Option<Instant>,
}

impl TapUnlock {
    /// Creates the standard 7-taps-in-3-seconds machine.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rule(TAP_THRESHOLD, TAP_WINDOW)
    }

    /// Creates a machine with a custom threshold and window.
    #[must_use]
    pub fn with_rule(threshold: u32, window: Duration) -> Self {
        Self {
            threshold,
            window,
            count: 0,
            last_tap: None,
        }
    }

    /// Registers a tap at the current instant. Returns `true` when this
    /// tap completes the gesture.
    pub fn tap(&mut self) -> bool {
        self.tap_at(Instant::now())
    }

    /// Registers a tap at an explicit instant. Instants are expected to
    /// be non-decreasing across calls; a stale instant simply counts as
    /// being within the window.
    pub fn tap_at(&mut self, at: Instant) -> bool {
        let expired = self
            .last_tap
            .is_some_and(|previous| at.duration_since(previous) > self.window);
        if expired {
            self.count = 0;
        }
        self.last_tap = Some(at);
        self.count += 1;
        if self.count >= self.threshold {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Current tap count (taps registered within the live window).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for TapUnlock {
    fn default() -> Self {
        Self::new()
    }
}
