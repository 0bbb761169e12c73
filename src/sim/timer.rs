//! Periodic spawn timer
//!
//! The session owns at most one `SpawnTimer` in an `Option`. Arming a new
//! timer always goes through `rearm`, which cancels whatever was there first,
//! so a reset can never leave two timers firing.
//!
//! Schedules are counted in whole simulation ticks, so a period boundary
//! lands on exactly one tick.

use serde::{Deserialize, Serialize};

/// Cancelable periodic trigger driven by the session tick counter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Ticks between fires
    interval: u64,
    /// Tick of the next fire
    next_fire: u64,
    cancelled: bool,
}

impl SpawnTimer {
    /// Arm a timer whose first fire is one interval after tick `now`
    pub fn arm(now: u64, interval: u64) -> Self {
        Self {
            interval,
            next_fire: now + interval,
            cancelled: false,
        }
    }

    /// Cancel the timer. A cancelled timer never fires again.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled
    }

    pub fn next_fire(&self) -> u64 {
        self.next_fire
    }

    /// Number of periods that elapsed up to tick `now`. Each one is consumed.
    pub fn poll(&mut self, now: u64) -> u32 {
        if self.cancelled || self.interval == 0 || now < self.next_fire {
            return 0;
        }
        let fired = (now - self.next_fire) / self.interval + 1;
        self.next_fire += fired * self.interval;
        fired as u32
    }
}

/// Cancel the timer in `slot` (if any) and replace it with a fresh one
pub fn rearm(slot: &mut Option<SpawnTimer>, now: u64, interval: u64) {
    if let Some(mut old) = slot.take() {
        old.cancel();
    }
    *slot = Some(SpawnTimer::arm(now, interval));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_each_interval() {
        let mut timer = SpawnTimer::arm(0, 360);
        assert_eq!(timer.poll(359), 0);
        assert_eq!(timer.poll(360), 1);
        assert_eq!(timer.poll(719), 0);
        assert_eq!(timer.poll(720), 1);
    }

    #[test]
    fn test_catches_up_after_long_gap() {
        let mut timer = SpawnTimer::arm(0, 360);
        assert_eq!(timer.poll(1140), 3);
        assert_eq!(timer.next_fire(), 1440);
    }

    #[test]
    fn test_cancelled_never_fires() {
        let mut timer = SpawnTimer::arm(0, 360);
        timer.cancel();
        assert!(!timer.is_active());
        assert_eq!(timer.poll(100_000), 0);
    }

    #[test]
    fn test_zero_interval_never_fires() {
        let mut timer = SpawnTimer::arm(5, 0);
        assert_eq!(timer.poll(5), 0);
        assert_eq!(timer.poll(500), 0);
    }

    #[test]
    fn test_rearm_replaces_single_timer() {
        let mut slot = None;
        rearm(&mut slot, 0, 360);
        rearm(&mut slot, 1200, 360);

        let timer = slot.as_mut().unwrap();
        assert!(timer.is_active());
        // Schedule follows the latest arm, not the first
        assert_eq!(timer.poll(1559), 0);
        assert_eq!(timer.poll(1560), 1);
    }
}
