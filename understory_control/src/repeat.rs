// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-repeat scheduling.
//!
//! A control with an [`AutoRepeat`] schedule keeps committing while it is
//! held pressed. No timers are created: the host reports elapsed time through
//! [`Control::advance`](crate::Control::advance).

use core::time::Duration;

use crate::error::ControlError;

/// Delay before the first repeat and interval between the following ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AutoRepeat {
    delay: Duration,
    interval: Duration,
}

impl Default for AutoRepeat {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            interval: Self::DEFAULT_INTERVAL,
        }
    }
}

impl AutoRepeat {
    /// Default wait before repeating starts.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
    /// Default time between repeats.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(33);

    /// A schedule repeating every `interval` after an initial `delay`.
    ///
    /// ```
    /// use core::time::Duration;
    /// use understory_control::{AutoRepeat, ControlError};
    ///
    /// assert!(AutoRepeat::new(Duration::ZERO, Duration::from_millis(10)).is_ok());
    /// assert_eq!(
    ///     AutoRepeat::new(Duration::from_millis(10), Duration::ZERO),
    ///     Err(ControlError::InvalidRepeatInterval)
    /// );
    /// ```
    pub fn new(delay: Duration, interval: Duration) -> Result<Self, ControlError> {
        if interval.is_zero() {
            return Err(ControlError::InvalidRepeatInterval);
        }
        Ok(Self { delay, interval })
    }

    /// Wait before the first repeat.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Time between repeats.
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Running state of an [`AutoRepeat`] schedule.
#[derive(Clone, Debug)]
pub(crate) struct RepeatClock {
    schedule: AutoRepeat,
    /// Time left until the next fire; `None` while disarmed.
    remaining: Option<Duration>,
}

impl RepeatClock {
    pub(crate) fn new(schedule: AutoRepeat) -> Self {
        Self {
            schedule,
            remaining: None,
        }
    }

    pub(crate) fn schedule(&self) -> AutoRepeat {
        self.schedule
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub(crate) fn arm(&mut self) {
        self.remaining = Some(self.schedule.delay);
    }

    pub(crate) fn disarm(&mut self) {
        self.remaining = None;
    }

    /// Let `elapsed` pass and return whether a repeat fell due.
    ///
    /// Like a timer tick, repeats missed during a long gap are not replayed:
    /// at most one is reported, and the clock stays aligned to the interval.
    pub(crate) fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let Some(overshoot) = elapsed.checked_sub(remaining) else {
            self.remaining = Some(remaining - elapsed);
            return false;
        };
        let interval = self.schedule.interval.as_nanos();
        let into_interval = overshoot.as_nanos() % interval;
        self.remaining = Some(nanos_to_duration(interval - into_interval));
        true
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// `nanos` never exceeds an interval, which is itself a `Duration`.
fn nanos_to_duration(nanos: u128) -> Duration {
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let subsec = u32::try_from(nanos % NANOS_PER_SEC).unwrap_or(0);
    Duration::new(secs, subsec)
}
