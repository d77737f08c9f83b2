//! The press-to-toggle strategies.

use crate::line::{Drive, Sense};
use crate::spin::Pause;

/// One scan of the input per call; the implementation decides if and when
/// the output flips.
///
/// Both variants of the tutorial loop live behind this trait: the debounced
/// edge toggle and the raw level copy. Neither can fail; the only condition
/// either one rejects is switch bounce, and that is policy, not an error.
pub trait ToggleStrategy {
    /// Run one loop iteration. Returns true when the output changed.
    fn poll<S, D, P>(&mut self, input: &S, output: &mut D, pause: &mut P) -> bool
    where
        S: Sense,
        D: Drive,
        P: Pause;
}

/// Debounce-confirmed, edge-triggered toggle.
///
/// Two states: idle and armed. A press seen while idle is held for the
/// debounce interval and re-sampled with the same sampling function; a press
/// that survives the re-sample toggles the output exactly once and arms the
/// latch. The latch releases only when the input returns to its released
/// level, so a held button cannot retrigger, and each release/re-press cycle
/// yields exactly one further toggle.
pub struct Debounced {
    armed: bool,
    hold: u32,
}

impl Debounced {
    /// Strategy with the given debounce interval, in [`Pause`] units.
    pub const fn new(hold: u32) -> Self {
        Debounced { armed: false, hold }
    }

    /// True while a confirmed press has not yet been released.
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl ToggleStrategy for Debounced {
    fn poll<S, D, P>(&mut self, input: &S, output: &mut D, pause: &mut P) -> bool
    where
        S: Sense,
        D: Drive,
        P: Pause,
    {
        if !input.is_pressed() {
            // A released line re-arms unconditionally, whatever state we
            // were in
            self.armed = false;
            return false;
        }
        if self.armed {
            // Already toggled for this press; wait for the release
            return false;
        }

        // The confirming sample strictly follows the hold. That ordering is
        // the whole debounce argument.
        pause.pause(self.hold);
        if !input.is_pressed() {
            // The first sample was bounce noise; stay idle
            return false;
        }

        output.toggle();
        self.armed = true;
        true
    }
}

/// Non-debounced baseline: the output copies the logical input level every
/// iteration, with no latched state. Flickers under switch bounce; kept as
/// the deliberate degraded variant of the samples.
pub struct LevelCopy;

impl ToggleStrategy for LevelCopy {
    fn poll<S, D, P>(&mut self, input: &S, output: &mut D, _pause: &mut P) -> bool
    where
        S: Sense,
        D: Drive,
        P: Pause,
    {
        let pressed = input.is_pressed();
        let changed = output.is_set() != pressed;
        output.set(pressed);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::{InputLine, OutputLine};
    use crate::reg::SimRegister;
    use crate::spin::NoPause;

    const BUTTON: u32 = 0x10;
    const LED: u32 = 0x02;

    fn lines(bank: &SimRegister) -> (InputLine<&SimRegister>, OutputLine<&SimRegister>) {
        // Pull-up at rest: the released button reads high
        bank.drive(BUTTON, true);
        (
            InputLine::new(bank, BUTTON),
            OutputLine::new(bank, LED),
        )
    }

    /// Pause double that records how it was called.
    struct Recording {
        calls: u32,
        units: u32,
    }

    impl Pause for Recording {
        fn pause(&mut self, units: u32) {
            self.calls += 1;
            self.units = units;
        }
    }

    /// Pause double that releases the button mid-hold, modelling a bounce
    /// inside the debounce window.
    struct BounceAway<'a> {
        bank: &'a SimRegister,
    }

    impl Pause for BounceAway<'_> {
        fn pause(&mut self, _units: u32) {
            self.bank.drive(BUTTON, true);
        }
    }

    #[test]
    fn single_toggle_per_clean_press() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = Debounced::new(10);
        let mut pause = NoPause;

        let mut toggles = 0;
        for _ in 0..2 {
            if strategy.poll(&button, &mut led, &mut pause) {
                toggles += 1;
            }
        }
        bank.drive(BUTTON, false);
        for _ in 0..20 {
            if strategy.poll(&button, &mut led, &mut pause) {
                toggles += 1;
            }
        }
        bank.drive(BUTTON, true);
        if strategy.poll(&button, &mut led, &mut pause) {
            toggles += 1;
        }

        assert_eq!(toggles, 1);
        assert!(bank.level(LED));
    }

    #[test]
    fn release_rearms_for_a_second_press() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = Debounced::new(10);
        let mut pause = NoPause;

        let mut toggles = 0;
        for _ in 0..2 {
            bank.drive(BUTTON, false);
            for _ in 0..5 {
                if strategy.poll(&button, &mut led, &mut pause) {
                    toggles += 1;
                }
            }
            bank.drive(BUTTON, true);
            strategy.poll(&button, &mut led, &mut pause);
        }

        assert_eq!(toggles, 2);
        // Two toggles land the LED back where it started
        assert!(!bank.level(LED));
    }

    #[test]
    fn bounce_inside_the_hold_is_rejected() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = Debounced::new(10);

        bank.drive(BUTTON, false);
        let toggled = strategy.poll(&button, &mut led, &mut BounceAway { bank: &bank });

        assert!(!toggled);
        assert!(!bank.level(LED));
        assert!(!strategy.is_armed());

        // The noisy event left the machine idle: a real press right after
        // still toggles
        bank.drive(BUTTON, false);
        assert!(strategy.poll(&button, &mut led, &mut NoPause));
    }

    #[test]
    fn holding_the_button_never_retriggers() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = Debounced::new(10);
        let mut pause = NoPause;

        bank.drive(BUTTON, false);
        let mut toggles = 0;
        for _ in 0..1000 {
            if strategy.poll(&button, &mut led, &mut pause) {
                toggles += 1;
            }
        }

        assert_eq!(toggles, 1);
        assert!(strategy.is_armed());
    }

    #[test]
    fn hold_is_requested_once_per_press_edge() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = Debounced::new(25);
        let mut pause = Recording { calls: 0, units: 0 };

        bank.drive(BUTTON, false);
        for _ in 0..50 {
            strategy.poll(&button, &mut led, &mut pause);
        }

        // Only the press edge pays the debounce hold; the armed polls do not
        assert_eq!(pause.calls, 1);
        assert_eq!(pause.units, 25);
    }

    #[test]
    fn level_copy_tracks_the_input_with_no_memory() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = LevelCopy;
        let mut pause = NoPause;

        for &pressed in &[false, true, true, false, true, false, false] {
            bank.drive(BUTTON, !pressed);
            strategy.poll(&button, &mut led, &mut pause);
            assert_eq!(bank.level(LED), pressed);
        }
    }

    #[test]
    fn level_copy_reports_edges_only() {
        let bank = SimRegister::new(0);
        let (button, mut led) = lines(&bank);
        let mut strategy = LevelCopy;
        let mut pause = NoPause;

        assert!(!strategy.poll(&button, &mut led, &mut pause));
        bank.drive(BUTTON, false);
        assert!(strategy.poll(&button, &mut led, &mut pause));
        assert!(!strategy.poll(&button, &mut led, &mut pause));
    }
}
