//! Number rendering for the debug line. Kept independent of
//! `core::fmt`, which is heavy for a bootloader.
use crate::utilities::bitwise::nibble;

pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Capacity of the buffer `dprintf!` renders into.
pub const RENDER_CAPACITY: usize = 256;

/// Bounded buffer for formatted output. Rendering past its capacity
/// fails, and failed renders are never transmitted.
pub type RenderBuffer = heapless::String<RENDER_CAPACITY>;

/// `0x` followed by exactly eight uppercase hex digits.
pub fn hex(value: u32) -> [u8; 10] {
    let mut text = *b"0x00000000";
    for (position, index) in (0..8u8).rev().enumerate() {
        text[2 + position] = HEX_DIGITS[nibble(value, index) as usize];
    }
    text
}

/// Decimal digits of a `u32`, without leading zeros.
pub struct Decimal {
    digits: [u8; 10],
    start: usize,
}

impl Decimal {
    pub fn new(mut value: u32) -> Self {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        Self { digits, start }
    }

    pub fn as_bytes(&self) -> &[u8] { &self.digits[self.start..] }
}
