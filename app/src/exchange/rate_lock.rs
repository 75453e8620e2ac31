//! # Rate Lock
//!
//! Looping countdown that guarantees the displayed rate for a fixed window.
//!
//! While unlocked, the countdown rolls over: when it reaches zero the
//! guarantee window restarts. Locking freezes the countdown (and the caller
//! suspends the ticker) so the rate the user saw is the rate they settle at.

use serde::{Deserialize, Serialize};

/// Rate-guarantee tier. Premium pays a higher service fee for a longer window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    Standard,
    Premium,
}

impl Tier {
    /// Guarantee window length in seconds
    pub fn window_secs(&self) -> u32 {
        match self {
            Tier::Standard => 15,
            Tier::Premium => 60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
        }
    }
}

/// State of the rate-guarantee countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLock {
    tier: Tier,
    remaining_secs: u32,
    locked: bool,
}

impl RateLock {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            remaining_secs: tier.window_secs(),
            locked: false,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// No-op while locked. At zero the window rolls over to the full tier
    /// length; the value never goes negative.
    pub fn tick_second(&mut self) {
        if self.locked {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.remaining_secs = self.tier.window_secs();
        }
    }

    /// Freeze the countdown at its current value
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Resume: the countdown restarts at the full tier window
    pub fn unlock(&mut self) {
        self.locked = false;
        self.remaining_secs = self.tier.window_secs();
    }

    /// Switch tier.
    ///
    /// The running countdown keeps its current value; only the window the
    /// next rollover (or unlock) restarts from changes. Ignored while locked:
    /// the guarantee the user took is not silently altered.
    pub fn set_tier(&mut self, tier: Tier) {
        if self.locked {
            return;
        }
        self.tier = tier;
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Countdown formatted as `M:SS`
    pub fn countdown_label(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

impl Default for RateLock {
    fn default() -> Self {
        RateLock::new(Tier::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Countdown Tests ==========

    #[test]
    fn test_standard_window_loops_at_fifteen() {
        let mut lock = RateLock::new(Tier::Standard);
        assert_eq!(lock.remaining_secs(), 15);
        for expected in (1..15).rev() {
            lock.tick_second();
            assert_eq!(lock.remaining_secs(), expected);
        }
        // The 15th tick rolls the window over instead of hitting zero
        lock.tick_second();
        assert_eq!(lock.remaining_secs(), 15);
    }

    #[test]
    fn test_countdown_never_negative() {
        let mut lock = RateLock::new(Tier::Standard);
        for _ in 0..100 {
            lock.tick_second();
            assert!(lock.remaining_secs() >= 1);
            assert!(lock.remaining_secs() <= 15);
        }
    }

    #[test]
    fn test_premium_window_is_sixty() {
        let lock = RateLock::new(Tier::Premium);
        assert_eq!(lock.remaining_secs(), 60);
        assert_eq!(lock.countdown_label(), "1:00");
    }

    #[test]
    fn test_countdown_label_format() {
        let mut lock = RateLock::new(Tier::Standard);
        assert_eq!(lock.countdown_label(), "0:15");
        for _ in 0..8 {
            lock.tick_second();
        }
        assert_eq!(lock.countdown_label(), "0:07");
    }

    // ========== Lock/Unlock Tests ==========

    #[test]
    fn test_lock_freezes_countdown() {
        let mut lock = RateLock::new(Tier::Standard);
        lock.tick_second();
        lock.tick_second();
        assert_eq!(lock.remaining_secs(), 13);

        lock.lock();
        for _ in 0..30 {
            lock.tick_second();
        }
        assert_eq!(lock.remaining_secs(), 13);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_unlock_restarts_full_window() {
        let mut lock = RateLock::new(Tier::Premium);
        for _ in 0..25 {
            lock.tick_second();
        }
        lock.lock();
        lock.unlock();
        assert!(!lock.is_locked());
        assert_eq!(lock.remaining_secs(), 60);
    }

    // ========== Tier Switch Tests ==========

    #[test]
    fn test_tier_switch_keeps_running_countdown() {
        let mut lock = RateLock::new(Tier::Standard);
        for _ in 0..5 {
            lock.tick_second();
        }
        lock.set_tier(Tier::Premium);
        assert_eq!(lock.tier(), Tier::Premium);
        assert_eq!(lock.remaining_secs(), 10);

        // The next rollover restarts from the new window
        for _ in 0..10 {
            lock.tick_second();
        }
        assert_eq!(lock.remaining_secs(), 60);
    }

    #[test]
    fn test_tier_switch_ignored_while_locked() {
        let mut lock = RateLock::new(Tier::Standard);
        lock.lock();
        lock.set_tier(Tier::Premium);
        assert_eq!(lock.tier(), Tier::Standard);
        assert_eq!(lock.remaining_secs(), 15);
    }
}
