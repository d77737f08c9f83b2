//! Debounced press-to-toggle: one red-LED flip per press of SW1.
//!
//! A press edge is confirmed by re-sampling the switch after a spin-delay
//! hold; a held button cannot retrigger, and releasing re-arms the latch.

#![no_std]
#![no_main]

use launchpad_io::line::{InputLine, OutputLine};
use launchpad_io::spin::SpinPause;
use launchpad_io::toggle::{Debounced, ToggleStrategy};
use tm4c123_launchpad::board::{clocks, Board};
use tm4c123_launchpad::io::{PortF, RED_LED, SW1};

/// Hold before the confirming re-sample, in spin units of ~1 ms
const DEBOUNCE_HOLD: u32 = 10;

#[no_mangle]
pub fn launchpad_main(board: Board) -> ! {
    // The board keeps the pull-up and pin configuration alive
    let _board = board;

    let port = PortF::new();
    let button = InputLine::new(port, SW1);
    let mut led = OutputLine::new(port, RED_LED);

    let mut pause = SpinPause::per_millisecond(clocks().sysclk.0);
    let mut strategy = Debounced::new(DEBOUNCE_HOLD);

    loop {
        strategy.poll(&button, &mut led, &mut pause);
    }
}
