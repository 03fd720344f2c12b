use serde::{Deserialize, Serialize};

use crate::Problem;

/// Highest pin number on the nRF52 P0 port.
pub const MAX_PIN: u8 = 31;

/// Number of bit times the line must idle high before the first frame.
pub const SETTLE_BIT_TIMES: u32 = 10;

/// What happens to output requested before the line has been initialised.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Uninitialized {
    /// Output is dropped silently.
    Discard,
    /// The first output call brings the line up.
    InitializeOnFirstUse,
}

impl Default for Uninitialized {
    fn default() -> Self { Uninitialized::Discard }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugUartConfiguration {
    pub pin: u8,
    pub baud_rate: u32,
    pub settle_ms: u32,
    pub inter_character_pad_ms: Option<u32>,
    pub uninitialized: Uninitialized,
    pub status_led_pin: Option<u8>,
    pub banner: Option<String>,
}

impl Default for DebugUartConfiguration {
    fn default() -> Self {
        Self {
            pin: 4,
            baud_rate: 9600,
            settle_ms: 10,
            inter_character_pad_ms: Some(1),
            uninitialized: Uninitialized::Discard,
            status_led_pin: Some(13),
            banner: Some("=== BOOTLOADER DEBUG UART ===".into()),
        }
    }
}

impl DebugUartConfiguration {
    /// Duration of a single symbol on the line, if the baud rate allows one.
    pub fn bit_time_us(&self) -> Option<u32> {
        1_000_000u32.checked_div(self.baud_rate).filter(|&us| us > 0)
    }

    pub fn problems(&self) -> std::vec::IntoIter<Problem> {
        let mut problems = vec![];

        if self.baud_rate == 0 {
            problems.push(Problem::ZeroBaudRate);
        } else if let Some(bit_time) = self.bit_time_us() {
            let minimum_us = bit_time * SETTLE_BIT_TIMES;
            let settle_us = self.settle_ms.saturating_mul(1000);
            if settle_us < minimum_us {
                problems.push(Problem::SettleTooShort { settle_us, minimum_us });
            }
        } else {
            problems.push(Problem::BaudRateTooHigh(self.baud_rate));
        }

        if self.pin > MAX_PIN {
            problems.push(Problem::PinOutOfRange(self.pin));
        }

        match self.status_led_pin {
            Some(led) if led > MAX_PIN => problems.push(Problem::PinOutOfRange(led)),
            Some(led) if led == self.pin => problems.push(Problem::LedSharesDebugPin(led)),
            _ => (),
        }

        problems.into_iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bit_time_is_derived_from_baud_rate() {
        let mut configuration = DebugUartConfiguration::default();
        assert_eq!(configuration.bit_time_us(), Some(104));

        configuration.baud_rate = 115_200;
        assert_eq!(configuration.bit_time_us(), Some(8));

        configuration.baud_rate = 0;
        assert_eq!(configuration.bit_time_us(), None);

        configuration.baud_rate = 2_000_000;
        assert_eq!(configuration.bit_time_us(), None);
    }

    #[test]
    fn slow_lines_need_longer_settle_intervals() {
        // Given
        let mut configuration = DebugUartConfiguration::default();
        configuration.baud_rate = 300;

        // When
        let problems: Vec<_> = configuration.problems().collect();

        // Then (3333us per bit, so 33330us are needed and only 10000us are given)
        assert_eq!(problems, vec![Problem::SettleTooShort { settle_us: 10_000, minimum_us: 33_330 }]);
    }

    #[test]
    fn pins_are_checked() {
        // Given
        let mut configuration = DebugUartConfiguration::default();
        configuration.pin = 40;
        configuration.status_led_pin = Some(40);
        assert_eq!(configuration.problems().collect::<Vec<_>>(), vec![
            Problem::PinOutOfRange(40),
            Problem::PinOutOfRange(40)
        ]);

        // When
        configuration.pin = 13;
        configuration.status_led_pin = Some(13);

        // Then
        assert_eq!(configuration.problems().collect::<Vec<_>>(), vec![Problem::LedSharesDebugPin(13)]);
    }
}
