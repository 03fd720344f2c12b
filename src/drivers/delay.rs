//! Busy-wait delays by instruction cycle counting.
use crate::hal::time::{Delay, Hertz, Microseconds, Milliseconds};

/// Delay provider spinning for a number of core clock cycles.
///
/// Accuracy depends on `sysclk` being the actual core frequency; time
/// spent in interrupts stretches the delay.
#[derive(Copy, Clone, Debug)]
pub struct CycleDelay {
    sysclk: Hertz,
}

impl CycleDelay {
    pub fn new<F: Into<Hertz>>(sysclk: F) -> Self { Self { sysclk: sysclk.into() } }

    /// Core clock cycles covering `period`, saturating on overflow.
    pub fn cycles(&self, period: Microseconds) -> u32 {
        let cycles = u64::from(self.sysclk.0) * u64::from(period.0) / 1_000_000;
        u32::try_from(cycles).unwrap_or(u32::MAX)
    }

    fn spin(cycles: u32) {
        #[cfg(target_arch = "arm")]
        cortex_m::asm::delay(cycles);
        #[cfg(not(target_arch = "arm"))]
        for _ in 0..cycles {
            core::hint::spin_loop();
        }
    }
}

impl Delay for CycleDelay {
    fn delay_us(&mut self, period: Microseconds) { Self::spin(self.cycles(period)); }

    fn delay_ms(&mut self, period: Milliseconds) {
        // Millisecond by millisecond, so long waits never saturate.
        for _ in 0..period.0 {
            self.delay_us(Microseconds(1_000));
        }
    }
}
