//! Full project ports for specific targets. They wire the generic
//! devices to board pins, clocks and the build configuration.

#[cfg(all(target_arch = "arm", feature = "nrf52832"))]
port!(nrf52832: [debug_uart, event_pump,]);
