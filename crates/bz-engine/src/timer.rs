//! Non-blocking interval timer over a wrapping microsecond counter.
//!
//! The counter is a `u32` like a microcontroller's `micros()`; it wraps
//! after ~71 minutes. Elapsed time is always computed with wrapping
//! subtraction, so an interval spanning the wrap is still measured
//! correctly as long as it is shorter than the wrap period.

use core::cell::Cell;

/// Source of a monotonically increasing, wrapping microsecond count.
pub trait MicrosClock {
    fn now_micros(&self) -> u32;
}

impl<C: MicrosClock + ?Sized> MicrosClock for &C {
    fn now_micros(&self) -> u32 {
        (**self).now_micros()
    }
}

/// A clock that only moves when told to. Used for tests and for offline
/// rendering, where time is derived from the sample position.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub const fn new(start_us: u32) -> Self {
        Self { now: Cell::new(start_us) }
    }

    pub fn set(&self, now_us: u32) {
        self.now.set(now_us);
    }

    pub fn advance(&self, us: u32) {
        self.now.set(self.now.get().wrapping_add(us));
    }

    pub fn advance_ms(&self, ms: u32) {
        self.advance(ms.wrapping_mul(1000));
    }
}

impl MicrosClock for ManualClock {
    fn now_micros(&self) -> u32 {
        self.now.get()
    }
}

/// Adapts any `Fn() -> u32`, e.g. a HAL's `micros()`.
#[derive(Clone, Copy, Debug)]
pub struct FnClock<F>(pub F);

impl<F: Fn() -> u32> MicrosClock for FnClock<F> {
    fn now_micros(&self) -> u32 {
        (self.0)()
    }
}

/// Wall clock, truncated to `u32` so it wraps like a hardware counter.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    pub fn new() -> Self {
        Self { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MicrosClock for StdClock {
    fn now_micros(&self) -> u32 {
        self.origin.elapsed().as_micros() as u32
    }
}

/// Polled interval timer.
///
/// Once armed, [`is_elapsed`](Self::is_elapsed) reports `true` when the
/// interval has passed and restarts the interval from that moment.
#[derive(Debug)]
pub struct StepTimer<C> {
    clock: C,
    /// Interval in microseconds
    interval_us: u32,
    /// Counter value the interval is measured from
    reference_us: u32,
    armed: bool,
}

impl<C: MicrosClock> StepTimer<C> {
    /// A disarmed timer.
    pub fn new(clock: C) -> Self {
        let reference_us = clock.now_micros();
        Self { clock, interval_us: 0, reference_us, armed: false }
    }

    /// Start measuring `interval_us` from now.
    pub fn arm(&mut self, interval_us: u32) {
        self.interval_us = interval_us;
        self.reference_us = self.clock.now_micros();
        self.armed = true;
    }

    /// Measure the current interval again from now.
    pub fn restart(&mut self) {
        self.reference_us = self.clock.now_micros();
    }

    /// Whether the interval has passed. Fires once, then re-arms from the
    /// current time. Always `false` while disarmed.
    pub fn is_elapsed(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        let now = self.clock.now_micros();
        if now.wrapping_sub(self.reference_us) >= self.interval_us {
            self.reference_us = now;
            true
        } else {
            false
        }
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Change the interval without moving the reference point.
    pub fn update_interval(&mut self, interval_us: u32) {
        self.interval_us = interval_us;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval(&self) -> u32 {
        self.interval_us
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
