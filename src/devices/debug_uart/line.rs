//! Serialization of single bytes onto a GPIO line.
//!
//! Frames are 8N1: a low start bit, eight data bits least significant
//! first, and a high stop bit, each held for exactly one bit time.
//!
//! ```text
//!  idle  start  d0   d1   d2   d3   d4   d5   d6   d7   stop  idle
//!  ‾‾‾‾‾|____|XXXX|XXXX|XXXX|XXXX|XXXX|XXXX|XXXX|XXXX|‾‾‾‾‾|‾‾‾‾
//! ```
use crate::{
    hal::{
        gpio::{ConfigurablePin, Drive, Level, OutputPin},
        time::{Delay, Microseconds, Milliseconds},
    },
    utilities::bitwise::BitFlags,
};

/// Symbols per frame.
pub const FRAME_BITS: usize = 10;

/// Line levels of the frame carrying `byte`, in transmission order.
pub fn frame(byte: u8) -> [Level; FRAME_BITS] {
    let mut symbols = [Level::High; FRAME_BITS];
    symbols[0] = Level::Low;
    for bit in 0..8u8 {
        symbols[1 + bit as usize] = byte.is_set(bit).into();
    }
    symbols
}

/// A pin and a delay, driven as a transmit-only serial line.
pub struct BitLine<P, D> {
    pin: P,
    delay: D,
    bit_time: Microseconds,
}

impl<P, D> BitLine<P, D>
where
    P: OutputPin + ConfigurablePin,
    D: Delay,
{
    pub fn new(pin: P, delay: D, bit_time: Microseconds) -> Self { Self { pin, delay, bit_time } }

    pub fn bit_time(&self) -> Microseconds { self.bit_time }

    /// Configures the pin and parks the line at its idle (high) level.
    pub fn idle(&mut self) {
        self.pin.configure_as_output();
        self.pin.set_high();
    }

    /// Sends one frame, returning once the stop bit has fully elapsed.
    pub fn send(&mut self, byte: u8) {
        for level in frame(byte) {
            self.pin.drive(level);
            self.delay.delay_us(self.bit_time);
        }
    }

    /// Sends every byte, each followed by an optional idle pad.
    pub fn send_all(&mut self, bytes: &[u8], pad: Option<Milliseconds>) {
        for &byte in bytes {
            self.send(byte);
            if let Some(pad) = pad {
                self.delay.delay_ms(pad);
            }
        }
    }

    pub fn wait(&mut self, period: Milliseconds) { self.delay.delay_ms(period); }

    pub fn free(self) -> (P, D) { (self.pin, self.delay) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::timeline::{Timeline, Trace};
    use Level::{High, Low};

    #[test]
    fn frames_are_lsb_first_between_start_and_stop_bits() {
        assert_eq!(frame(0x00), [Low, Low, Low, Low, Low, Low, Low, Low, Low, High]);
        assert_eq!(frame(0xFF), [Low, High, High, High, High, High, High, High, High, High]);
        assert_eq!(frame(0x01), [Low, High, Low, Low, Low, Low, Low, Low, Low, High]);
        // 'A' = 0b0100_0001
        assert_eq!(frame(b'A'), [Low, High, Low, Low, Low, Low, Low, High, Low, High]);
    }

    #[test]
    fn sending_holds_every_symbol_for_one_bit_time() {
        // Given
        let timeline = Timeline::new();
        let mut line = BitLine::new(timeline.pin(), timeline.delay(), Microseconds(104));

        // When
        line.send(0x80);

        // Then
        let traces = timeline.traces();
        assert_eq!(traces.len(), 2 * FRAME_BITS);
        assert_eq!(&traces[..2], &[Trace::Low, Trace::WaitUs(104)]);
        assert_eq!(&traces[16..], &[Trace::High, Trace::WaitUs(104), Trace::High, Trace::WaitUs(104)]);
        assert_eq!(timeline.elapsed_us(), 1040);
    }

    #[test]
    fn idle_configures_then_raises_the_line() {
        // Given
        let timeline = Timeline::new();
        let mut line = BitLine::new(timeline.pin(), timeline.delay(), Microseconds(104));

        // When
        line.idle();

        // Then
        assert_eq!(timeline.traces(), vec![Trace::Configured, Trace::High]);
        let (pin, _) = line.free();
        assert!(pin.configured && pin.is_high());
    }

    #[test]
    fn padding_follows_each_byte() {
        // Given
        let timeline = Timeline::new();
        let mut line = BitLine::new(timeline.pin(), timeline.delay(), Microseconds(8));

        // When
        line.send_all(b"ab", Some(Milliseconds(1)));

        // Then
        let pads: Vec<usize> = timeline
            .traces()
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Trace::WaitMs(1))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(pads, vec![20, 41]);
    }
}
