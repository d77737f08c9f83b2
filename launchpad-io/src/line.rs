//! Logical input and output lines.
//!
//! Two families implement the same contracts: mask-addressed lines inside a
//! shared [`DataRegister`], and adapters over `embedded-hal` pins for code
//! that already holds HAL pin types.

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::reg::DataRegister;

/// A boolean signal source.
///
/// The electrical polarity is resolved behind this trait: `is_pressed`
/// answers the logical question, not the voltage one.
pub trait Sense {
    /// True while the signal is in its active state.
    fn is_pressed(&self) -> bool;
}

/// A boolean signal sink.
pub trait Drive {
    /// Flip the line.
    fn toggle(&mut self);
    /// Drive the line to a level.
    fn set(&mut self, high: bool);
    /// Level the line is currently driven to.
    fn is_set(&self) -> bool;
}

/// Active-low input bit inside a shared data register.
///
/// Precondition: the pin is configured as a digital input with its pull-up
/// enabled, so the released line reads 1. That setup belongs to the board
/// layer and is not checked at runtime.
pub struct InputLine<R: DataRegister> {
    reg: R,
    mask: u32,
}

impl<R: DataRegister> InputLine<R> {
    /// Input over the masked bit.
    pub const fn new(reg: R, mask: u32) -> Self {
        InputLine { reg, mask }
    }
}

impl<R: DataRegister> Sense for InputLine<R> {
    fn is_pressed(&self) -> bool {
        // Pull-up wiring: a press grounds the line
        self.reg.read() & self.mask == 0
    }
}

/// Output bit(s) inside a shared data register.
pub struct OutputLine<R: DataRegister> {
    reg: R,
    mask: u32,
}

impl<R: DataRegister> OutputLine<R> {
    /// Output over the masked bit(s).
    pub const fn new(reg: R, mask: u32) -> Self {
        OutputLine { reg, mask }
    }
}

impl<R: DataRegister> Drive for OutputLine<R> {
    fn toggle(&mut self) {
        // XOR against the mask only. The register is shared with other
        // lines, so a plain assignment would clobber their bits.
        let bits = self.reg.read();
        self.reg.write(bits ^ self.mask);
    }

    fn set(&mut self, high: bool) {
        let bits = self.reg.read() & !self.mask;
        self.reg.write(if high { bits | self.mask } else { bits });
    }

    fn is_set(&self) -> bool {
        self.reg.read() & self.mask != 0
    }
}

/// An `embedded-hal` input pin wired active-low: pull-up bias, switch to
/// ground, like both LaunchPad buttons.
pub struct ActiveLow<P: InputPin> {
    pin: P,
}

impl<P: InputPin> ActiveLow<P> {
    /// Wrap a pull-up input pin.
    pub const fn new(pin: P) -> Self {
        ActiveLow { pin }
    }
}

impl<P: InputPin> Sense for ActiveLow<P> {
    fn is_pressed(&self) -> bool {
        self.pin.is_low().unwrap_or_default()
    }
}

/// An `embedded-hal` output pin with a latched level, so set-only pins still
/// support `toggle`.
pub struct Latched<P: OutputPin> {
    pin: P,
    level: bool,
}

impl<P: OutputPin> Latched<P> {
    /// Wrap an output pin. `level` must match the level the pin is actually
    /// driven to; the latch is not written until the first operation.
    pub const fn new(pin: P, level: bool) -> Self {
        Latched { pin, level }
    }

    fn apply(&mut self) {
        if self.level {
            self.pin.set_high().unwrap_or_default();
        } else {
            self.pin.set_low().unwrap_or_default();
        }
    }
}

impl<P: OutputPin> Drive for Latched<P> {
    fn toggle(&mut self) {
        self.level = !self.level;
        self.apply();
    }

    fn set(&mut self, high: bool) {
        self.level = high;
        self.apply();
    }

    fn is_set(&self) -> bool {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::SimRegister;
    use embedded_hal_mock::pin::{Mock, State, Transaction};

    const BUTTON: u32 = 0x10;
    const LED: u32 = 0x02;

    #[test]
    fn toggle_preserves_unrelated_bits() {
        let bank = SimRegister::new(0b1011_0001);
        let mut led = OutputLine::new(&bank, LED);

        led.toggle();
        assert_eq!((&bank).read(), 0b1011_0011);
        led.toggle();
        assert_eq!((&bank).read(), 0b1011_0001);
    }

    #[test]
    fn set_touches_only_its_own_bits() {
        let bank = SimRegister::new(0xFF);
        let mut led = OutputLine::new(&bank, LED);

        led.set(false);
        assert_eq!((&bank).read(), 0xFD);
        led.set(true);
        assert_eq!((&bank).read(), 0xFF);
    }

    #[test]
    fn input_is_active_low() {
        let bank = SimRegister::new(BUTTON);
        let button = InputLine::new(&bank, BUTTON);

        assert!(!button.is_pressed());
        bank.drive(BUTTON, false);
        assert!(button.is_pressed());
    }

    #[test]
    fn lines_share_one_register() {
        let bank = SimRegister::new(BUTTON);
        let button = InputLine::new(&bank, BUTTON);
        let mut led = OutputLine::new(&bank, LED);

        led.toggle();
        assert!(led.is_set());
        assert!(!button.is_pressed());
        assert!(bank.level(BUTTON));
    }

    #[test]
    fn active_low_adapter_reads_hal_pin() {
        let expectations = [
            Transaction::get(State::Low),
            Transaction::get(State::High),
        ];
        let pin = Mock::new(&expectations);
        let mut done = pin.clone();

        let input = ActiveLow::new(pin);
        assert!(input.is_pressed());
        assert!(!input.is_pressed());
        done.done();
    }

    #[test]
    fn latched_adapter_toggles_set_only_pin() {
        let expectations = [
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::set(State::High),
        ];
        let pin = Mock::new(&expectations);
        let mut done = pin.clone();

        let mut output = Latched::new(pin, false);
        output.toggle();
        assert!(output.is_set());
        output.toggle();
        assert!(!output.is_set());
        output.set(true);
        assert!(output.is_set());
        done.done();
    }
}
