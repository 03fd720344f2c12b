//! # Bootloader debug line and SoftDevice event pump
//!
//! This crate contains the two pieces of firmware glue a BLE
//! bootloader runs alongside its update logic:
//!
//! * A transmit-only debug UART, bit-banged over a single GPIO
//! (`devices::debug_uart`).
//! * A task that drains SoftDevice events each time the stack
//! signals new work (`devices::event_pump`).
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

#[cfg(all(target_arch = "arm", feature = "nrf52832"))]
pub use nrf52832_pac as pac;

#[cfg(target_arch = "arm")]
extern crate panic_semihosting;
#[cfg(target_arch = "arm")]
use defmt_rtt as _;
extern crate static_assertions;

#[doc(hidden)]
pub use ufmt;

#[macro_use]
pub mod utilities {
    pub mod bitwise;
    pub mod guard;
    #[macro_use]
    pub mod logging;
    #[macro_use]
    mod macros;
}

pub mod config;
pub mod error;
#[macro_use]
pub mod hal;
pub mod devices;
pub mod drivers;
pub mod ports;
