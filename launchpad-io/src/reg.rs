//! The shared data-register capability behind every logical line.

use core::cell::Cell;

/// One memory-mapped data register shared by several logical signals.
///
/// Methods take `&self`: the hardware register is interior-mutable by
/// nature, and a single register instance has to back an input line and an
/// output line at the same time. Reads and writes never fail; an
/// unconfigured pin reads as an unspecified but well-typed level.
pub trait DataRegister {
    /// Read the whole register.
    fn read(&self) -> u32;
    /// Write the whole register.
    fn write(&self, bits: u32);
}

/// A simulated register bank standing in for the hardware port.
///
/// Tests drive the input bits the way the outside world would and watch the
/// output bits the way firmware watches a pin. Lines hold `&SimRegister`,
/// which is `Copy`, so one bank can back any number of them.
#[derive(Default)]
pub struct SimRegister {
    bits: Cell<u32>,
}

impl SimRegister {
    /// Bank with the given initial bits.
    pub const fn new(bits: u32) -> Self {
        SimRegister {
            bits: Cell::new(bits),
        }
    }

    /// Drive the masked bits to a level, as an external signal would.
    pub fn drive(&self, mask: u32, high: bool) {
        let bits = self.bits.get();
        self.bits.set(if high { bits | mask } else { bits & !mask });
    }

    /// Current level of the masked bit(s).
    pub fn level(&self, mask: u32) -> bool {
        self.bits.get() & mask != 0
    }
}

impl DataRegister for &SimRegister {
    fn read(&self) -> u32 {
        self.bits.get()
    }

    fn write(&self, bits: u32) {
        self.bits.set(bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_touches_only_the_mask() {
        let bank = SimRegister::new(0b1010_0001);
        bank.drive(0b0000_0010, true);
        assert_eq!((&bank).read(), 0b1010_0011);
        bank.drive(0b1000_0000, false);
        assert_eq!((&bank).read(), 0b0010_0011);
    }

    #[test]
    fn level_reports_the_masked_bit() {
        let bank = SimRegister::new(0x10);
        assert!(bank.level(0x10));
        assert!(!bank.level(0x02));
    }
}
