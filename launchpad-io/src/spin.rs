//! Busy-wait timing.

/// A blocking wait for a number of abstract units.
///
/// This is the debounce hold of the polling samples. It is a coarse,
/// non-preemptible wait, not an accurate timer; tests inject their own
/// implementation, including ones that mutate the simulated port mid-pause.
pub trait Pause {
    /// Block for `units` units.
    fn pause(&mut self, units: u32);
}

/// Calibrated busy loop.
///
/// One unit spins `spins_per_unit` iterations against a known core clock.
/// The wall time per unit depends on how the loop compiles; the classic
/// clock/1000 calibration gives a unit on the order of a millisecond.
pub struct SpinPause {
    spins_per_unit: u32,
}

impl SpinPause {
    /// Spin loop with an explicit calibration constant.
    pub const fn new(spins_per_unit: u32) -> Self {
        SpinPause { spins_per_unit }
    }

    /// Roughly millisecond units on the given core clock.
    pub const fn per_millisecond(clock_hz: u32) -> Self {
        SpinPause::new(clock_hz / 1000)
    }
}

impl Pause for SpinPause {
    fn pause(&mut self, units: u32) {
        for _ in 0..units {
            for _ in 0..self.spins_per_unit {
                core::hint::spin_loop();
            }
        }
    }
}

/// No wait at all, for the strategies that ignore timing.
pub struct NoPause;

impl Pause for NoPause {
    fn pause(&mut self, _units: u32) {}
}
