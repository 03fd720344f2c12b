//! Error types and the unrecoverable-error escalation path.
use ufmt::{uWrite, uwrite, uwriteln};

/// Top level error type. Like in any bootloader, textual descriptions
/// are kept short as they are meant to be reported directly over the
/// debug line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    /// Error caused by a faulty configuration
    ConfigurationError(&'static str),
    /// The scheduler refused to create a task
    TaskCreationRefused,
    /// The stack reported something other than "no more events"
    EventPollFailed(u32),
    /// No room left to register another event observer
    ObserverListFull,
}

impl Error {
    /// Reports error via any `ufmt` writer (usually the debug line).
    pub fn report<W: uWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
        match self {
            Error::ConfigurationError(text) => uwriteln!(writer, "[ConfigurationError] -> {}", *text),
            Error::TaskCreationRefused => uwriteln!(writer, "[TaskCreationRefused]"),
            Error::EventPollFailed(code) => {
                uwrite!(writer, "[EventPollFailed] -> code ")?;
                uwriteln!(writer, "{}", *code)
            }
            Error::ObserverListFull => uwriteln!(writer, "[ObserverListFull]"),
        }
    }
}

/// Handler for errors nothing can recover from. Implementations
/// don't return: they halt or reset the system.
pub trait Fatal {
    fn halt(&mut self, error: Error) -> !;
}
