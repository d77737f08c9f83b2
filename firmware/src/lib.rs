//! Board crate for the EK-TM4C123GXL LaunchPad and its GPIO/SysTick samples

#![no_std]
#![deny(missing_docs)]

// In release mode, cause a linker error if a panicking branch survives
#[cfg(not(debug_assertions))]
extern crate panic_never;

extern crate cortex_m;
extern crate cortex_m_rt;
extern crate embedded_hal;
extern crate tm4c123x_hal;

pub mod board;
pub mod builtins;
pub mod io;
pub mod startup;
