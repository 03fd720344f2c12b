//! Driver implementations for all supported platforms. Drivers for
//! plain Cortex-M primitives build on every target so their logic can
//! be tested on the host; register level drivers are feature gated.

pub mod delay;
pub mod notification;
pub mod thread_mode;

#[cfg(target_arch = "arm")]
pub mod fatal;

#[cfg(all(target_arch = "arm", feature = "nrf52832"))]
pub mod nrf52 {
    pub mod gpio;
}
