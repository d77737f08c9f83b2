//! Register-level bindings for GPIO port F, where all of the LaunchPad's
//! user IO lives.

use launchpad_io::reg::DataRegister;
use tm4c123x_hal::tm4c123x;

/// PF0, switch SW2. Active low; locked at reset, see `Board::new`.
pub const SW2: u32 = 0x01;
/// PF1, the red LED.
pub const RED_LED: u32 = 0x02;
/// PF2, the blue LED.
pub const BLUE_LED: u32 = 0x04;
/// PF3, the green LED.
pub const GREEN_LED: u32 = 0x08;
/// PF4, switch SW1. Active low, pull-up enabled by the board setup.
pub const SW1: u32 = 0x10;

/// The port F data register as a [`DataRegister`] capability.
///
/// Precondition: `Board::new` has already run, so directions, digital
/// enables and pull-ups are configured and the `Board` keeps those pin
/// states alive. This handle only ever touches DATA, which is a single bus
/// transaction either way, so sharing it between the main loop and an
/// interrupt handler needs no lock.
#[derive(Clone, Copy)]
pub struct PortF {
    _config_held: (),
}

impl PortF {
    /// Bind to the port F data register.
    pub const fn new() -> Self {
        PortF { _config_held: () }
    }

    fn regs() -> &'static tm4c123x::gpio_porta::RegisterBlock {
        unsafe { &*tm4c123x::GPIO_PORTF::ptr() }
    }
}

impl Default for PortF {
    fn default() -> Self {
        PortF::new()
    }
}

impl DataRegister for PortF {
    fn read(&self) -> u32 {
        Self::regs().data.read().bits()
    }

    fn write(&self, bits: u32) {
        Self::regs().data.write(|w| unsafe { w.bits(bits) });
    }
}
