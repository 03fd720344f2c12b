//! Hardware Abstraction Layer, containing interfaces
//! for low level drivers and for the external collaborators
//! (scheduler, BLE stack) the devices are built on.
#![macro_use]

pub mod gpio;
pub mod led;
pub mod rtos;
pub mod serial;
pub mod softdevice;
pub mod time;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;
