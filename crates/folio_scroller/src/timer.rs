//! Fire-and-forget unlock timers
//!
//! Timers are armed against the scroller's own clock and fired when the
//! clock is advanced past their deadline. There is no cancellation: a timer
//! armed during one mount still fires after an unmount, so each timer is
//! stamped with the mount generation that armed it and the owner decides
//! whether a fired timer is still relevant.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct TimerId;
}

/// A timer waiting for its deadline
#[derive(Clone, Copy, Debug)]
struct PendingUnlock {
    deadline: Duration,
    generation: u64,
}

/// Pending unlock timers
#[derive(Debug, Default)]
pub struct UnlockTimers {
    pending: SlotMap<TimerId, PendingUnlock>,
}

impl UnlockTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an unlock `delay` after `now`
    pub fn arm(&mut self, now: Duration, delay: Duration, generation: u64) {
        self.pending.insert(PendingUnlock {
            deadline: now + delay,
            generation,
        });
    }

    /// Remove every timer whose deadline has passed
    ///
    /// Returns the generation of each fired timer, earliest deadline first.
    pub fn drain_due(&mut self, now: Duration) -> Vec<u64> {
        let mut due: Vec<(TimerId, PendingUnlock)> = self
            .pending
            .iter()
            .filter(|(_, timer)| timer.deadline <= now)
            .map(|(id, timer)| (id, *timer))
            .collect();
        due.sort_by_key(|(_, timer)| timer.deadline);

        due.into_iter()
            .filter_map(|(id, _)| self.pending.remove(id))
            .map(|timer| timer.generation)
            .collect()
    }

    /// Number of timers still waiting
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no timers are waiting
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_timer_fires_at_deadline() {
        let mut timers = UnlockTimers::new();
        timers.arm(ms(100), ms(800), 1);

        assert!(timers.drain_due(ms(899)).is_empty());
        assert_eq!(timers.len(), 1);

        assert_eq!(timers.drain_due(ms(900)), vec![1]);
        assert!(timers.is_empty());
        assert!(timers.drain_due(ms(2000)).is_empty());
    }

    #[test]
    fn test_zero_delay_fires_on_next_drain() {
        let mut timers = UnlockTimers::new();
        timers.arm(ms(50), Duration::ZERO, 3);
        assert_eq!(timers.drain_due(ms(50)), vec![3]);
    }

    #[test]
    fn test_drain_orders_by_deadline() {
        let mut timers = UnlockTimers::new();
        timers.arm(ms(0), ms(300), 2);
        timers.arm(ms(0), ms(100), 1);
        timers.arm(ms(0), ms(500), 3);

        assert_eq!(timers.drain_due(ms(400)), vec![1, 2]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.drain_due(ms(1000)), vec![3]);
    }
}
