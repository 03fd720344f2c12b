//! Unrecoverable error handling on target.
use crate::error::{Error, Fatal};

/// Logs the error and resets the core.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemReset;

impl Fatal for SystemReset {
    fn halt(&mut self, error: Error) -> ! {
        error!("Fatal error, resetting: {}", error);
        cortex_m::peripheral::SCB::sys_reset()
    }
}
