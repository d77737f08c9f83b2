//! Cycle the three LaunchPad LEDs with a calibrated spin delay.
//!
//! Register-level counterpart of the classic first-blink program: every LED
//! write is a read-modify-write against the shared port F data register.

#![no_std]
#![no_main]

use launchpad_io::line::{Drive, OutputLine};
use launchpad_io::spin::{Pause, SpinPause};
use tm4c123_launchpad::board::{clocks, Board};
use tm4c123_launchpad::io::{PortF, BLUE_LED, GREEN_LED, RED_LED};

/// Dwell per LED, in spin units of roughly a millisecond
const STEP: u32 = 250;

#[no_mangle]
pub fn launchpad_main(board: Board) -> ! {
    // The board keeps the pin configuration alive; all IO below goes
    // through the data register
    let _board = board;

    let port = PortF::new();
    let mut red = OutputLine::new(port, RED_LED);
    let mut blue = OutputLine::new(port, BLUE_LED);
    let mut green = OutputLine::new(port, GREEN_LED);

    let mut pause = SpinPause::per_millisecond(clocks().sysclk.0);

    loop {
        red.set(true);
        green.set(false);
        pause.pause(STEP);

        red.set(false);
        blue.set(true);
        pause.pause(STEP);

        blue.set(false);
        green.set(true);
        pause.pause(STEP);
    }
}
