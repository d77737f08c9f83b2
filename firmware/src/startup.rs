//! Handles board-specific CPU startup

use cortex_m;
use cortex_m_rt::{entry, exception, ExceptionFrame};

use super::board::{clocks, safe, Board};
use tm4c123x_hal::{gpio::GpioExt, serial, sysctl::SysctlExt, time::Bps};

use irq::{handler, scope, scoped_interrupts};

#[cfg(debug_assertions)]
use core::fmt::Write;

// This function must be implemented by the application that uses the crate
// and is the entry-point for that application after board initialization
extern "Rust" {
    fn launchpad_main(board: Board);
}

/// Reset-vector routine: register inert runtime exception handlers, bring
/// the board up, then hand over to the application.
#[entry]
unsafe fn call_main() -> ! {
    // Initialize runtime-defined exception handlers before running any
    // application code or doing anything that might trigger them
    handler!(systick_default_handler = || {});
    handler!(pendsv_default_handler = || {});
    handler!(svcall_default_handler = || {});

    scope(|default| {
        default.register(Interrupt::SysTick, systick_default_handler);
        default.register(Interrupt::PendSV, pendsv_default_handler);
        default.register(Interrupt::SVCall, svcall_default_handler);

        let board = Board::new();
        launchpad_main(board);
    });

    loop {
        cortex_m::asm::wfi();
    }
}

/// HardFault has a fixed priority of -1: it preempts every exception with
/// configurable priority. Dump the stacked frame over UART0 in debug builds,
/// then blink until reset.
#[exception]
unsafe fn HardFault(_sf: &ExceptionFrame) -> ! {
    let peripherals = tm4c123x_hal::Peripherals::steal();
    let sysctl = peripherals.SYSCTL.constrain();
    let mut pins = peripherals.GPIO_PORTA.split(&sysctl.power_control);
    let mut uart = serial::Serial::uart0(
        peripherals.UART0,
        pins.pa1.into_af_push_pull(&mut pins.control),
        pins.pa0.into_af_push_pull(&mut pins.control),
        (),
        (),
        Bps(115200),
        serial::NewlineMode::SwapLFtoCRLF,
        clocks(),
        &sysctl.power_control,
    );

    // Debug formatter can panic, so this can't be run with panic_never
    #[cfg(debug_assertions)]
    writeln!(uart, "HardFault: {:?}", _sf).unwrap_or_default();

    safe();
}

/// Non-maskable interrupt: highest priority after reset, cannot be masked.
#[exception]
unsafe fn NonMaskableInt() {
    safe();
}

/// Memory-protection fault, including instruction fetches from
/// Execute-Never regions.
#[exception]
fn MemoryManagement() {
    safe();
}

/// Bus error on an instruction or data transaction.
#[exception]
fn BusFault() {
    safe();
}

/// Fault related to instruction execution: undefined instruction, illegal
/// unaligned access, invalid state on execution or exception return.
#[exception]
fn UsageFault() {
    safe();
}

/// Debug monitor interrupt handler.
#[exception]
fn DebugMonitor() {
    // Nothing
}

/// A place-holder ISR used when we have nothing better to use.
#[exception]
unsafe fn DefaultHandler(_irq_number: i16) -> () {
    // Nothing
}

scoped_interrupts! {
    /// Exception interrupts that the application can override at runtime
    /// by registering a scoped handler.
    ///
    /// SysTick fires when the system timer counts down to zero; the
    /// interrupt-driven samples hang their periodic toggle off it. SVCall
    /// and PendSV are kept registrable for the same reason an OS would use
    /// them, even though the samples leave them inert.
    ///
    /// This goes through the exception interface rather than the interrupt
    /// interface because the tm4c hal doesn't carry the cortex-m-rt
    /// interrupt definitions that svd2rust normally autogenerates.
    #[allow(missing_docs)]
    pub enum Interrupt {
        SysTick,
        SVCall,
        PendSV
    }

    use #[exception];
}
