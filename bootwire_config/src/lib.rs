//! This bootwire sub-crate contains all definitions to help generate
//! the configuration constants of a bootwire build.
//!
//! NOTE: This code is not included anywhere from bootwire itself! This
//! is a dependency of the bootwire **build script**, which reads a RON
//! configuration file, validates it and emits the constants bootwire
//! includes as its `config` module.

use serde::{Deserialize, Serialize};

use debug_uart::DebugUartConfiguration;
use event_pump::EventPumpConfiguration;

pub mod codegen;
pub mod debug_uart;
pub mod event_pump;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub debug_uart: DebugUartConfiguration,
    pub event_pump: EventPumpConfiguration,
}

/// A reason the configuration can't be turned into a working build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Problem {
    ZeroBaudRate,
    BaudRateTooHigh(u32),
    SettleTooShort { settle_us: u32, minimum_us: u32 },
    PinOutOfRange(u8),
    LedSharesDebugPin(u8),
    EmptyTaskName,
    TaskNameTooLong(usize),
    StackTooSmall(u16),
    NoObserverCapacity,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::ZeroBaudRate => write!(f, "debug UART baud rate must be non-zero"),
            Problem::BaudRateTooHigh(baud) => {
                write!(f, "debug UART baud rate {} leaves a bit time under one microsecond", baud)
            }
            Problem::SettleTooShort { settle_us, minimum_us } => write!(
                f,
                "debug UART settle interval of {}us is shorter than ten bit times ({}us)",
                settle_us, minimum_us
            ),
            Problem::PinOutOfRange(pin) => write!(f, "pin P0.{:02} does not exist", pin),
            Problem::LedSharesDebugPin(pin) => {
                write!(f, "status LED and debug UART can't both drive P0.{:02}", pin)
            }
            Problem::EmptyTaskName => write!(f, "event pump task name can't be empty"),
            Problem::TaskNameTooLong(length) => write!(
                f,
                "event pump task name is {} characters long, the limit is {}",
                length,
                event_pump::MAX_TASK_NAME_LENGTH
            ),
            Problem::StackTooSmall(words) => write!(
                f,
                "event pump stack of {} words is below the minimum of {}",
                words,
                event_pump::MIN_STACK_WORDS
            ),
            Problem::NoObserverCapacity => write!(f, "at least one observer slot is required"),
        }
    }
}

impl Configuration {
    pub fn valid(&self) -> bool { self.problems().next().is_none() }

    pub fn problems(&self) -> impl Iterator<Item = Problem> {
        self.debug_uart.problems().chain(self.event_pump.problems())
    }
}
