//! Debug line on a bare nRF52832, pins and rate as configured at build time.
use crate::{
    config::debug_uart as generated,
    devices::{
        debug_uart::{Config, DebugUart},
        led::{Logic, MonochromeLed, NoIndicator},
    },
    drivers::{delay::CycleDelay, nrf52::gpio::Pin},
    error::Error,
    hal::time::U32Ext,
};
use crate::pac::P0;

/// Core clock after reset (HFINT, no prescaler).
const SYSCLK_MHZ: u32 = 64;

pub type BoardUart = DebugUart<Pin, CycleDelay, MonochromeLed<Pin>>;

impl BoardUart {
    /// Takes port 0, so no other driver can reach the debug or LED pins.
    pub fn from_port(_port: P0) -> Result<Self, Error> {
        // NOTE(safety) the configuration is checked at build time for
        // valid, distinct pin numbers, and port 0 was consumed above.
        let (pin, led) = unsafe {
            (Pin::steal(generated::PIN), generated::STATUS_LED_PIN.map(|number| Pin::steal(number)))
        };
        let delay = CycleDelay::new(SYSCLK_MHZ.mhz());
        let uart = DebugUart::<_, _, NoIndicator>::new(pin, delay, Config::default())?;
        Ok(uart.with_indicator(led.map(|pin| MonochromeLed::configured(pin, Logic::Inverted))))
    }
}
