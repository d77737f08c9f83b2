//! Blink the blue LED from the SysTick interrupt.
//!
//! The timer-interrupt scheduling model: SysTick fires every millisecond
//! and the registered handler advances a software countdown that toggles
//! the LED once per second. The handler never blocks and never debounces;
//! the main context only sleeps. A heartbeat line goes out over UART0.

#![no_std]
#![no_main]

use core::fmt::Write;

use cortex_m::peripheral::syst::SystClkSource;
use irq::{handler, scope};
use static_assertions::const_assert;

use launchpad_io::line::OutputLine;
use launchpad_io::tick::{reload_for_ms, Blinker, Countdown};
use tm4c123_launchpad::board::{clocks, Board};
use tm4c123_launchpad::io::{PortF, BLUE_LED};
use tm4c123_launchpad::startup::Interrupt;
use tm4c123x_hal::gpio::GpioExt;
use tm4c123x_hal::serial;
use tm4c123x_hal::time::Bps;

const SYSCLK_HZ: u32 = 80_000_000;
/// One interrupt per millisecond
const TICK_RELOAD: u32 = reload_for_ms(SYSCLK_HZ, 1);
// SysTick's reload register is only 24 bits wide
const_assert!(TICK_RELOAD <= 0x00FF_FFFF);

/// Milliseconds between LED toggles
const TOGGLE_MS: u32 = 1000;

#[no_mangle]
pub fn launchpad_main(mut board: Board) -> ! {
    let mut pins_a = board.GPIO_PORTA.split(&board.power_control);
    let mut uart = serial::Serial::uart0(
        board.UART0,
        pins_a.pa1.into_af_push_pull(&mut pins_a.control),
        pins_a.pa0.into_af_push_pull(&mut pins_a.control),
        (),
        (),
        Bps(115200),
        serial::NewlineMode::SwapLFtoCRLF,
        clocks(),
        &board.power_control,
    );

    // Configure and enable the SysTick interrupt
    board.core_peripherals.SYST.set_reload(TICK_RELOAD);
    board
        .core_peripherals
        .SYST
        .set_clock_source(SystClkSource::Core);
    board.core_peripherals.SYST.clear_current();
    board.core_peripherals.SYST.enable_counter();
    board.core_peripherals.SYST.enable_interrupt();

    writeln!(uart, "SysTick blink, 1 ms tick").unwrap_or_default();

    // The handler's whole job: divide the tick down and toggle the line.
    // The DATA write is one bus transaction, so the idle main context and
    // the handler need no lock between them.
    let mut blinker = Blinker::new(
        Countdown::every(TOGGLE_MS),
        OutputLine::new(PortF::new(), BLUE_LED),
    );
    let mut ticks: u64 = 0;

    handler!(
        systick_handler = || {
            ticks = ticks.wrapping_add(1);
            if blinker.tick() {
                writeln!(uart, "t = {} ms", ticks).unwrap_or_default();
            }
        }
    );

    // Register the handler, then leave the main context idle
    scope(|s| {
        s.register(Interrupt::SysTick, systick_handler);

        loop {
            cortex_m::asm::wfi();
        }
    });

    // Main must not return
    loop {}
}
