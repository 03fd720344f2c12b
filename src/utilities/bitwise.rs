//! Convenience bitwise operations.

/// Simple check for particular bits being set or cleared.
pub trait BitFlags {
    fn is_set(&self, bit: u8) -> bool;
    fn is_clear(&self, bit: u8) -> bool;
}

/// Blanket implementation for any types convertible to u32.
impl<U: Copy + Into<u32>> BitFlags for U {
    fn is_set(&self, bit: u8) -> bool {
        assert!(bit < 32);
        ((*self).into() & (1u32 << bit)) != 0
    }

    fn is_clear(&self, bit: u8) -> bool { !self.is_set(bit) }
}

/// Nibble `index` of a word, counting from the least significant one.
pub fn nibble(value: u32, index: u8) -> u8 {
    assert!(index < 8);
    ((value >> (index * 4)) & 0xF) as u8
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn correctly_checks_bits() {
        assert!(3u8.is_set(0));
        assert!(3u8.is_set(1));
        assert!(3u8.is_clear(2));
        assert!(2u8.is_clear(0));
        assert!(0x80u8.is_set(7));
    }

    #[test]
    fn extracts_nibbles() {
        assert_eq!(0xF, nibble(0xDEAD_BEEF, 0));
        assert_eq!(0xE, nibble(0xDEAD_BEEF, 1));
        assert_eq!(0xD, nibble(0xDEAD_BEEF, 7));
        assert_eq!(0x0, nibble(0x0000_0001, 7));
    }
}
