//! Build-time configuration.
//!
//! Generated by the build script from the RON file named by the
//! `BOOTWIRE_CONFIG` environment variable (or the sample default
//! configuration).
use static_assertions::const_assert;

include!(concat!(env!("OUT_DIR"), "/generated_config.rs"));

const_assert!(debug_uart::BAUD_RATE > 0);
const_assert!(debug_uart::BAUD_RATE <= 1_000_000);
const_assert!(debug_uart::PIN <= 31);
const_assert!(event_pump::MAX_OBSERVERS > 0);
