//! Bit-banged debug UART.
//!
//! Transmit-only, fixed baud rate, 8N1 output over a single GPIO, used to
//! trace bootloader execution before (or instead of) any hardware UART.
//! Every call busy-waits for the whole transmission: a byte takes about
//! ten bit times (~1.04ms at 9600 baud) plus the optional pad.
//!
//! The debug line is strictly best effort. Nothing here reports failure
//! to the caller: output requested before initialisation, absent strings
//! and formatted output that doesn't fit the render buffer are all
//! silently dropped.
//!
//! There is no reentrancy guard. Callers sharing a line between thread
//! and interrupt context must serialize access themselves.
//!
//! # Example
//! ```
//! # use bootwire_lib::devices::debug_uart::*;
//! # use bootwire_lib::hal::{doubles::timeline::Timeline, time::*};
//! # let timeline = Timeline::new();
//! # let (pin, delay) = (timeline.pin(), timeline.delay());
//! let config = Config { banner: None, inter_character_pad: None, ..Config::default() };
//! let mut uart = DebugUart::new(pin, delay, config).unwrap();
//! uart.put_string("dropped, not initialised yet");
//! # assert_eq!(timeline.gpio_calls(), 0);
//!
//! uart.init();
//! uart.put_formatted("Image at ", 0x0002_6000, "\r\n");
//! bootwire_lib::dprintf!(uart, "{} banks\r\n", 2u8);
//! ```
use crate::{
    devices::led::NoIndicator,
    error::Error,
    hal::{
        gpio::{ConfigurablePin, OutputPin},
        led::Toggle,
        serial,
        time::{Bps, Delay, Microseconds, Milliseconds},
    },
    utilities::guard::Guard,
};
use core::convert::Infallible;
use ufmt::uWrite;

use line::BitLine;
use render::Decimal;

pub mod line;
pub mod render;

/// Minimum idle time before the first frame, in bit times.
pub const SETTLE_BIT_TIMES: u32 = 10;

/// Renders a `ufmt` format string into a bounded buffer and transmits it,
/// only if it fit entirely.
///
/// ```
/// # use bootwire_lib::devices::debug_uart::*;
/// # use bootwire_lib::hal::doubles::timeline::Timeline;
/// # let timeline = Timeline::new();
/// # let config = Config { banner: None, ..Config::default() };
/// # let mut uart = DebugUart::new(timeline.pin(), timeline.delay(), config).unwrap();
/// # uart.init();
/// bootwire_lib::dprintf!(uart, "Booting bank {}\r\n", 1u8);
/// ```
#[macro_export]
macro_rules! dprintf {
    ($uart:expr, $($arg:tt)*) => {{
        let mut rendered = $crate::devices::debug_uart::render::RenderBuffer::new();
        if $crate::ufmt::uwrite!(rendered, $($arg)*).is_ok() {
            $uart.put_string(rendered.as_str());
        }
    }};
}

/// What happens to output requested before `init`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UninitializedPolicy {
    /// Output is dropped silently.
    Discard,
    /// The first output call runs `init` itself.
    InitializeOnFirstUse,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Ready,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub baud_rate: Bps,
    /// Time the line idles high after configuration.
    pub settle: Milliseconds,
    /// Idle time after each character of string output.
    pub inter_character_pad: Option<Milliseconds>,
    pub uninitialized: UninitializedPolicy,
    /// Title line of the startup banner. No banner if absent.
    pub banner: Option<&'static str>,
}

impl Default for Config {
    fn default() -> Self {
        use crate::config::debug_uart as generated;
        Self {
            baud_rate: Bps(generated::BAUD_RATE),
            settle: Milliseconds(generated::SETTLE_MS),
            inter_character_pad: generated::INTER_CHARACTER_PAD_MS.map(Milliseconds),
            uninitialized: if generated::INITIALIZE_ON_FIRST_USE {
                UninitializedPolicy::InitializeOnFirstUse
            } else {
                UninitializedPolicy::Discard
            },
            banner: generated::BANNER,
        }
    }
}

impl Config {
    /// Derives the bit time, rejecting configurations that can't be
    /// timed correctly.
    pub fn bit_time(&self) -> Result<Microseconds, Error> {
        let bit_time = self
            .baud_rate
            .bit_time()
            .ok_or(Error::ConfigurationError("Baud rate has no whole microsecond bit time"))?;
        if self.settle.0.saturating_mul(1000) < bit_time.0 * SETTLE_BIT_TIMES {
            return Err(Error::ConfigurationError("Settle interval under ten bit times"));
        }
        Ok(bit_time)
    }
}

/// Debug line over pin `P`, timed by `D`, optionally lighting status
/// indicator `L` while the startup banner goes out.
pub struct DebugUart<P, D, L = NoIndicator> {
    line: BitLine<P, D>,
    indicator: Option<L>,
    config: Config,
    state: State,
}

impl<P, D> DebugUart<P, D, NoIndicator>
where
    P: OutputPin + ConfigurablePin,
    D: Delay,
{
    /// Wraps a pin and delay. The line isn't touched until `init`.
    pub fn new(pin: P, delay: D, config: Config) -> Result<Self, Error> {
        let bit_time = config.bit_time()?;
        Ok(Self {
            line: BitLine::new(pin, delay, bit_time),
            indicator: None,
            config,
            state: State::Uninitialized,
        })
    }
}

impl<P, D, L> DebugUart<P, D, L>
where
    P: OutputPin + ConfigurablePin,
    D: Delay,
    L: Toggle,
{
    /// Attaches (or detaches, with `None`) the status indicator.
    pub fn with_indicator<M: Toggle>(self, indicator: Option<M>) -> DebugUart<P, D, M> {
        DebugUart { line: self.line, indicator, config: self.config, state: self.state }
    }

    /// Brings the line up: configures the pin, idles it high for the
    /// settle interval, then sends the banner if one is configured.
    /// Only the first call has any effect.
    pub fn init(&mut self) {
        if self.is_ready() {
            return;
        }
        self.line.idle();
        self.line.wait(self.config.settle);
        self.state = State::Ready;
        debug!("Debug line up at {} baud", self.config.baud_rate.0);

        if let Some(title) = self.config.banner {
            self.banner(title);
        }
    }

    pub fn is_ready(&self) -> bool { self.state == State::Ready }

    pub fn state(&self) -> State { self.state }

    pub fn bit_time(&self) -> Microseconds { self.line.bit_time() }

    /// Sends a single byte.
    pub fn put_char(&mut self, byte: u8) {
        if self.prepare() {
            self.line.send(byte);
        }
    }

    /// Sends every byte of `text`, each followed by the configured pad.
    /// An absent string sends nothing.
    pub fn put_string<'s>(&mut self, text: impl Into<Option<&'s str>>) {
        let text = match text.into() {
            Some(text) if !text.is_empty() => text,
            _ => return,
        };
        if self.prepare() {
            self.line.send_all(text.as_bytes(), self.config.inter_character_pad);
        }
    }

    /// Sends `value` as `0x` and eight uppercase hex digits.
    pub fn put_hex(&mut self, value: u32) {
        if self.prepare() {
            self.line.send_all(&render::hex(value), None);
        }
    }

    /// Sends `value` in decimal, without leading zeros.
    pub fn put_decimal(&mut self, value: u32) {
        if self.prepare() {
            self.line.send_all(Decimal::new(value).as_bytes(), None);
        }
    }

    /// Sends `prefix`, then `value` in hex, then `suffix`. Absent parts
    /// are skipped.
    pub fn put_formatted<'p, 's>(
        &mut self,
        prefix: impl Into<Option<&'p str>>,
        value: u32,
        suffix: impl Into<Option<&'s str>>,
    ) {
        if !self.prepare() {
            return;
        }
        self.put_string(prefix);
        self.put_hex(value);
        self.put_string(suffix);
    }

    /// Whether output may proceed, running `init` first if the policy
    /// asks for it.
    fn prepare(&mut self) -> bool {
        match (self.state, self.config.uninitialized) {
            (State::Ready, _) => true,
            (State::Uninitialized, UninitializedPolicy::Discard) => false,
            (State::Uninitialized, UninitializedPolicy::InitializeOnFirstUse) => {
                self.init();
                true
            }
        }
    }

    fn banner(&mut self, title: &str) {
        let pad = self.config.inter_character_pad;
        let baud = Decimal::new(self.config.baud_rate.0);
        let _lit = self.indicator.as_mut().map(|led| Guard::new(led, L::on, L::off));
        let chunks: [&[u8]; 5] =
            [title.as_bytes(), b"\r\n", b"Bit-banged @ ", baud.as_bytes(), b" baud\r\n\r\n"];
        for chunk in chunks {
            self.line.send_all(chunk, pad);
        }
    }

    pub fn free(self) -> (P, D, Option<L>) {
        let (pin, delay) = self.line.free();
        (pin, delay, self.indicator)
    }
}

impl<P, D, L> uWrite for DebugUart<P, D, L>
where
    P: OutputPin + ConfigurablePin,
    D: Delay,
    L: Toggle,
{
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.put_string(s);
        Ok(())
    }
}

impl<P, D, L> serial::Write<u8> for DebugUart<P, D, L>
where
    P: OutputPin + ConfigurablePin,
    D: Delay,
    L: Toggle,
{
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Infallible> {
        self.put_char(word);
        Ok(())
    }
}
