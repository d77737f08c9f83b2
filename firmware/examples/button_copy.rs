//! Mirror switch SW1 onto the red LED, with no debounce.
//!
//! The level-copy baseline: the output is driven from the input every
//! iteration, so the LED flickers under switch bounce. This variant runs on
//! the HAL pin adapters instead of raw register masks.

#![no_std]
#![no_main]

use launchpad_io::line::{ActiveLow, Latched};
use launchpad_io::spin::NoPause;
use launchpad_io::toggle::{LevelCopy, ToggleStrategy};
use tm4c123_launchpad::board::Board;

#[no_mangle]
pub fn launchpad_main(board: Board) -> ! {
    // SW1 is wired to ground with the pull-up enabled: pressed reads low
    let input = ActiveLow::new(board.button0);
    let mut output = Latched::new(board.led_red, false);

    let mut strategy = LevelCopy;
    let mut pause = NoPause;

    loop {
        strategy.poll(&input, &mut output, &mut pause);
    }
}
