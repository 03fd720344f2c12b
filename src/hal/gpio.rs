//! # Simple GPIO interface
//!
//! Writes to a pin are assumed to take effect immediately, before
//! any subsequent delay starts (no write queueing).

/// Interface to a writable pin.
pub trait OutputPin {
    fn set_low(&mut self);
    fn set_high(&mut self);
}

/// Interface to a pin whose direction is chosen at runtime.
pub trait ConfigurablePin {
    /// Configures the pin as a push-pull digital output.
    fn configure_as_output(&mut self);
}

/// Logic level of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self { if high { Level::High } else { Level::Low } }
}

/// Convenience extension to drive any output pin to a given level.
pub trait Drive: OutputPin {
    fn drive(&mut self, level: Level) {
        match level {
            Level::Low => self.set_low(),
            Level::High => self.set_high(),
        }
    }
}

impl<Pin: OutputPin> Drive for Pin {}
