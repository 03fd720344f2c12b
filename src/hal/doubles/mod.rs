//! Test doubles for the hal interfaces. Host only.

pub mod fatal;
pub mod gpio;
pub mod rtos;
pub mod softdevice;
pub mod time;
pub mod timeline;
