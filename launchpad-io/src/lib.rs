//! Register-level digital IO and the toggle logic behind the TM4C123
//! LaunchPad button/LED samples.
//!
//! Everything here is hardware-free: the data register, the debounce pause
//! and the countdown timer are capabilities injected through traits, so the
//! same state machines run on the board and under a simulated register bank
//! in the test suite.

#![no_std]
#![deny(missing_docs)]

extern crate embedded_hal;

pub mod line;
pub mod reg;
pub mod spin;
pub mod tick;
pub mod toggle;
