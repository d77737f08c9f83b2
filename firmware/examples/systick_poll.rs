//! Blink the green LED by polling the SysTick wrap flag.
//!
//! SysTick free-runs with a 1 ms reload; the main loop watches the wrap
//! flag and divides it down in software to a half-second toggle. No
//! interrupts are enabled.

#![no_std]
#![no_main]

use cortex_m::peripheral::syst::SystClkSource;
use launchpad_io::line::OutputLine;
use launchpad_io::tick::{reload_for_ms, Blinker, Countdown};
use static_assertions::const_assert;
use tm4c123_launchpad::board::Board;
use tm4c123_launchpad::io::{PortF, GREEN_LED};

const SYSCLK_HZ: u32 = 80_000_000;
/// One hardware wrap per millisecond
const TICK_RELOAD: u32 = reload_for_ms(SYSCLK_HZ, 1);
// SysTick's reload register is only 24 bits wide
const_assert!(TICK_RELOAD <= 0x00FF_FFFF);

/// Milliseconds between LED toggles
const TOGGLE_MS: u32 = 500;

#[no_mangle]
pub fn launchpad_main(mut board: Board) -> ! {
    board.core_peripherals.SYST.set_reload(TICK_RELOAD);
    board
        .core_peripherals
        .SYST
        .set_clock_source(SystClkSource::Core);
    board.core_peripherals.SYST.clear_current();
    board.core_peripherals.SYST.enable_counter();

    let mut blinker = Blinker::new(
        Countdown::every(TOGGLE_MS),
        OutputLine::new(PortF::new(), GREEN_LED),
    );

    loop {
        // Reading the wrap flag clears it; each read that returns true is
        // one elapsed millisecond
        if board.core_peripherals.SYST.has_wrapped() {
            blinker.tick();
        }
    }
}
