//! Port 0 GPIO for the nRF52 family.
use crate::hal::gpio::{ConfigurablePin, OutputPin};
use crate::pac::P0;

/// A single port 0 pin, addressed by number.
pub struct Pin {
    number: u8,
}

impl Pin {
    /// # Safety
    ///
    /// The caller must guarantee no other `Pin` exists for `number`,
    /// and `number` must be lower than 32.
    pub unsafe fn steal(number: u8) -> Self { Self { number } }

    pub fn number(&self) -> u8 { self.number }

    fn mask(&self) -> u32 { 1 << self.number }
}

impl ConfigurablePin for Pin {
    fn configure_as_output(&mut self) {
        // NOTE(safety) pin configuration registers are per pin, and pins
        // are uniquely owned.
        unsafe {
            (*P0::ptr()).pin_cnf[self.number as usize].write(|w| {
                w.dir().output().input().disconnect().pull().disabled().drive().s0s1().sense().disabled()
            })
        }
    }
}

impl OutputPin for Pin {
    fn set_high(&mut self) {
        // NOTE(safety) atomic write to a set-only register.
        unsafe { (*P0::ptr()).outset.write(|w| w.bits(self.mask())) }
    }

    fn set_low(&mut self) {
        // NOTE(safety) atomic write to a clear-only register.
        unsafe { (*P0::ptr()).outclr.write(|w| w.bits(self.mask())) }
    }
}
