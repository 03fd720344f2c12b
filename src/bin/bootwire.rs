#![cfg_attr(test, allow(unused_attributes))]
#![cfg_attr(all(not(test), target_arch = "arm"), no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[allow(unused_imports)]
use cortex_m_rt::{entry, exception};

#[cfg(target_arch = "arm")]
#[entry]
fn main() -> ! {
    use bootwire_lib::{
        dprintf,
        drivers::fatal::SystemReset,
        error::{Error, Fatal},
        pac,
        ports::debug_uart::BoardUart,
    };

    let peripherals = match pac::Peripherals::take() {
        Some(peripherals) => peripherals,
        None => SystemReset.halt(Error::ConfigurationError("Peripherals taken")),
    };
    let mut uart = match BoardUart::from_port(peripherals.P0) {
        Ok(uart) => uart,
        Err(error) => SystemReset.halt(error),
    };

    uart.init();
    uart.put_formatted("Reset reason: ", peripherals.POWER.resetreas.read().bits(), "\r\n");
    dprintf!(uart, "Debug line at {} baud\r\n", bootwire_lib::config::debug_uart::BAUD_RATE);

    loop {
        cortex_m::asm::wfi();
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {}
