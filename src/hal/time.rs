//! Time units and busy-wait delays.

#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct Microseconds(pub u32);

#[derive(Clone, Copy, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct Milliseconds(pub u32);

/// Bits per second
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct Bps(pub u32);

/// Hertz
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct Hertz(pub u32);

/// MegaHertz
#[derive(Clone, Copy, Debug, PartialOrd, PartialEq, Eq)]
pub struct MegaHertz(pub u32);

/// Extension trait that adds convenience methods to the `u32` type
pub trait U32Ext {
    /// Wrap in `Bps`
    fn bps(self) -> Bps;

    /// Wrap in `Hertz`
    fn hz(self) -> Hertz;

    /// Wrap in `MegaHertz`
    fn mhz(self) -> MegaHertz;

    /// Wrap in `Milliseconds`
    fn ms(self) -> Milliseconds;

    /// Wrap in `Microseconds`
    fn us(self) -> Microseconds;
}

impl U32Ext for u32 {
    fn bps(self) -> Bps { Bps(self) }

    fn hz(self) -> Hertz { Hertz(self) }

    fn mhz(self) -> MegaHertz { MegaHertz(self) }

    fn ms(self) -> Milliseconds { Milliseconds(self) }

    fn us(self) -> Microseconds { Microseconds(self) }
}

impl From<MegaHertz> for Hertz {
    fn from(frequency: MegaHertz) -> Self { Hertz(frequency.0 * 1_000_000) }
}

impl From<Milliseconds> for Microseconds {
    fn from(period: Milliseconds) -> Self { Microseconds(period.0 * 1_000) }
}

impl Bps {
    /// Duration of a single symbol at this rate, truncated to whole
    /// microseconds. `None` for rates with no representable bit time.
    pub fn bit_time(self) -> Option<Microseconds> {
        1_000_000u32.checked_div(self.0).filter(|&us| us > 0).map(Microseconds)
    }
}

/// Busy-wait delay provider.
///
/// Implementations block for at least, and approximately exactly,
/// the requested duration.
pub trait Delay {
    fn delay_us(&mut self, period: Microseconds);
    fn delay_ms(&mut self, period: Milliseconds);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bit_times_for_common_rates() {
        assert_eq!(Some(Microseconds(104)), 9600.bps().bit_time());
        assert_eq!(Some(Microseconds(8)), 115_200.bps().bit_time());
        assert_eq!(Some(Microseconds(1)), 1_000_000.bps().bit_time());
    }

    #[test]
    fn unrepresentable_rates_have_no_bit_time() {
        assert_eq!(None, 0.bps().bit_time());
        assert_eq!(None, 2_000_000.bps().bit_time());
    }

    #[test]
    fn unit_conversions() {
        assert_eq!(Hertz(64_000_000), 64.mhz().into());
        assert_eq!(Microseconds(10_000), 10.ms().into());
    }
}
