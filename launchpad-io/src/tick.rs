//! The countdown-timer model behind the periodic scheduling mode.

use crate::line::Drive;

/// Free-running reload counter with SysTick semantics: a reload value of N
/// fires once every N + 1 ticks, then reloads itself.
pub struct Countdown {
    reload: u32,
    val: u32,
}

impl Countdown {
    /// Counter with an explicit reload value.
    pub const fn from_reload(reload: u32) -> Self {
        Countdown { reload, val: reload }
    }

    /// Counter that fires once every `period` ticks. `period` must be at
    /// least 1.
    pub const fn every(period: u32) -> Self {
        Countdown::from_reload(period - 1)
    }

    /// Advance one tick; true on the tick that wraps the counter.
    pub fn tick(&mut self) -> bool {
        if self.val == 0 {
            self.val = self.reload;
            true
        } else {
            self.val -= 1;
            false
        }
    }
}

/// Reload value implementing a period in seconds on the given clock.
///
/// The hardware counts reload + 1 cycles per wrap, hence the minus one:
/// one second at 16 MHz is the classic 15_999_999.
pub const fn reload_for_s(clock_hz: u32, seconds: u32) -> u32 {
    clock_hz * seconds - 1
}

/// Reload value implementing a period in milliseconds on the given clock.
pub const fn reload_for_ms(clock_hz: u32, ms: u32) -> u32 {
    (clock_hz / 1000) * ms - 1
}

/// A countdown wired to an output line: one toggle per timer period.
///
/// This is the whole interrupt-model handler. It must stay non-blocking;
/// periodic toggling has no input to debounce.
pub struct Blinker<D: Drive> {
    timer: Countdown,
    line: D,
}

impl<D: Drive> Blinker<D> {
    /// Pair a countdown with the line it toggles.
    pub const fn new(timer: Countdown, line: D) -> Self {
        Blinker { timer, line }
    }

    /// Advance one tick; toggles the line (and returns true) once per
    /// timer period.
    pub fn tick(&mut self) -> bool {
        if self.timer.tick() {
            self.line.toggle();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::OutputLine;
    use crate::reg::SimRegister;

    #[test]
    fn fires_once_per_period() {
        const K: u32 = 7;
        let mut timer = Countdown::every(K);

        let mut fired = 0;
        for elapsed in 1..=100u32 {
            if timer.tick() {
                fired += 1;
            }
            assert_eq!(fired, elapsed / K);
        }
    }

    #[test]
    fn period_of_one_fires_every_tick() {
        let mut timer = Countdown::every(1);
        for _ in 0..10 {
            assert!(timer.tick());
        }
    }

    #[test]
    fn reload_helpers_match_the_datasheet_arithmetic() {
        assert_eq!(reload_for_s(16_000_000, 1), 15_999_999);
        assert_eq!(reload_for_ms(80_000_000, 1), 79_999);
    }

    #[test]
    fn blinker_toggles_once_per_period() {
        const LED: u32 = 0x08;
        const K: u32 = 500;
        let bank = SimRegister::new(0);
        let mut blinker = Blinker::new(Countdown::every(K), OutputLine::new(&bank, LED));

        let mut toggles = 0u32;
        for elapsed in 1..=5000u32 {
            if blinker.tick() {
                toggles += 1;
            }
            assert_eq!(toggles, elapsed / K);
            // The line level is the parity of the toggle count
            assert_eq!(bank.level(LED), toggles % 2 == 1);
        }
    }
}
