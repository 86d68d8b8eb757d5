//! Carousel rotation.
//!
//! [`Rotation`] keeps no timers of its own. Whoever drives it asks
//! [`Rotation::next_wakeup`] how long to sleep, then reports the time that
//! passed through [`Rotation::elapse`].

use std::time::Duration;

pub const ROTATE_INTERVAL: Duration = Duration::from_millis(4000);
/// Pause after manual navigation before automatic rotation resumes.
pub const GRACE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running { until_tick: Duration },
    Grace { remaining: Duration },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    len: usize,
    current: usize,
    direction: Direction,
    phase: Phase,
    interval: Duration,
    grace: Duration,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self::with_timing(len, ROTATE_INTERVAL, GRACE_DELAY)
    }

    pub fn with_timing(len: usize, interval: Duration, grace: Duration) -> Self {
        Self {
            len,
            current: 0,
            direction: Direction::Forward,
            phase: Phase::Idle,
            interval: interval.max(Duration::from_millis(1)),
            grace,
        }
    }

    /// Begins automatic rotation. Lists with fewer than two items have
    /// nothing to rotate and stay idle.
    pub fn start(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        if self.phase == Phase::Idle {
            self.phase = Phase::Running {
                until_tick: self.interval,
            };
        }
        true
    }

    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time until the rotation next needs attention, or `None` when idle.
    pub fn next_wakeup(&self) -> Option<Duration> {
        match self.phase {
            Phase::Idle => None,
            Phase::Running { until_tick } => Some(until_tick),
            Phase::Grace { remaining } => Some(remaining),
        }
    }

    /// Lets `dt` pass, advancing once per elapsed interval. Returns whether
    /// the current index changed.
    pub fn elapse(&mut self, mut dt: Duration) -> bool {
        let mut changed = false;
        loop {
            match self.phase {
                Phase::Idle => return changed,
                Phase::Grace { remaining } => {
                    if dt < remaining {
                        self.phase = Phase::Grace {
                            remaining: remaining - dt,
                        };
                        return changed;
                    }
                    dt -= remaining;
                    self.phase = Phase::Running {
                        until_tick: self.interval,
                    };
                }
                Phase::Running { until_tick } => {
                    if dt < until_tick {
                        self.phase = Phase::Running {
                            until_tick: until_tick - dt,
                        };
                        return changed;
                    }
                    dt -= until_tick;
                    self.current = (self.current + 1) % self.len;
                    self.direction = Direction::Forward;
                    self.phase = Phase::Running {
                        until_tick: self.interval,
                    };
                    changed = true;
                }
            }
        }
    }

    /// Shows `index` immediately. Out of range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.direction = if index < self.current {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.jump(index);
        true
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Forward;
        self.jump((self.current + 1) % self.len);
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = Direction::Backward;
        self.jump((self.current + self.len - 1) % self.len);
    }

    // manual moves hold off automatic rotation for the grace period
    fn jump(&mut self, index: usize) {
        self.current = index;
        if self.is_running() {
            self.phase = Phase::Grace {
                remaining: self.grace,
            };
        }
    }
}
