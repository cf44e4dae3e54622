//! Byte splitting, bit access and carry/borrow detection.
//!
//! The carry helpers take the bit index the carry is observed *out of*:
//! bit 3 gives the 8-bit half carry, bit 7 the 8-bit carry, and bits 11/15
//! the 16-bit equivalents used by `ADD HL,rr`.

/// Split a 16-bit value into `(high, low)`.
#[inline]
pub const fn split_u16(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// Join a high and a low byte into a 16-bit value.
#[inline]
pub const fn join_u16(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

#[inline]
pub const fn get_bit(value: u8, index: u8) -> bool {
    (value >> index) & 1 == 1
}

#[inline]
pub const fn set_bit(value: u8, index: u8, bit: bool) -> u8 {
    if bit {
        value | (1 << index)
    } else {
        value & !(1 << index)
    }
}

#[inline]
pub const fn get_bit16(value: u16, index: u8) -> bool {
    (value >> index) & 1 == 1
}

#[inline]
pub const fn set_bit16(value: u16, index: u8, bit: bool) -> u16 {
    if bit {
        value | (1 << index)
    } else {
        value & !(1 << index)
    }
}

/// Extract `width` bits starting at `offset` (counted from the LSB).
#[inline]
pub const fn slice(value: u8, offset: u8, width: u8) -> u8 {
    let mask = ((1u16 << width) - 1) as u8;
    (value >> offset) & mask
}

#[inline]
const fn low_mask(bit: u8) -> u32 {
    (1u32 << (bit + 1)) - 1
}

/// True when `a + b` carries out of `bit`.
#[inline]
pub const fn carries(a: u16, b: u16, bit: u8) -> bool {
    carries_with(a, b, false, bit)
}

/// True when `a + b + carry_in` carries out of `bit`.
#[inline]
pub const fn carries_with(a: u16, b: u16, carry_in: bool, bit: u8) -> bool {
    let mask = low_mask(bit);
    (a as u32 & mask) + (b as u32 & mask) + carry_in as u32 > mask
}

/// True when `a - b` borrows into `bit`.
#[inline]
pub const fn borrows(a: u16, b: u16, bit: u8) -> bool {
    borrows_with(a, b, false, bit)
}

/// True when `a - b - borrow_in` borrows into `bit`.
#[inline]
pub const fn borrows_with(a: u16, b: u16, borrow_in: bool, bit: u8) -> bool {
    let mask = low_mask(bit);
    (a as u32 & mask) < (b as u32 & mask) + borrow_in as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_and_join_are_high_byte_first() {
        assert_eq!(split_u16(0xBEEF), (0xBE, 0xEF));
        assert_eq!(join_u16(0xBE, 0xEF), 0xBEEF);
    }

    #[test]
    fn bit_get_set_and_slice() {
        assert!(get_bit(0b1000_0000, 7));
        assert!(!get_bit(0b1000_0000, 6));
        assert_eq!(set_bit(0x00, 4, true), 0x10);
        assert_eq!(set_bit(0xFF, 0, false), 0xFE);
        assert!(get_bit16(0x8000, 15));
        assert_eq!(set_bit16(0x0000, 11, true), 0x0800);
        assert_eq!(slice(0b0011_1000, 3, 3), 0b111);
        assert_eq!(slice(0b1011_0110, 4, 2), 0b11);
        assert_eq!(slice(0xAB, 0, 8), 0xAB);
    }

    #[test]
    fn half_carry_and_carry_on_8_bit_boundaries() {
        assert!(carries(0x0F, 0x01, 3));
        assert!(!carries(0x0E, 0x01, 3));
        assert!(carries(0xFF, 0x01, 7));
        assert!(!carries(0x7F, 0x80, 7));
        assert!(carries_with(0x0F, 0x00, true, 3));
        assert!(carries_with(0xFF, 0x00, true, 7));
    }

    #[test]
    fn carry_on_16_bit_boundaries() {
        assert!(carries(0x0FFF, 0x0001, 11));
        assert!(!carries(0x0FFE, 0x0001, 11));
        assert!(carries(0xFFFF, 0x0001, 15));
        assert!(!carries(0x7FFF, 0x0001, 15));
    }

    #[test]
    fn borrow_detection() {
        assert!(borrows(0x10, 0x01, 3));
        assert!(!borrows(0x11, 0x01, 3));
        assert!(borrows(0x00, 0x01, 7));
        assert!(!borrows(0x01, 0x01, 7));
        assert!(borrows_with(0x01, 0x01, true, 7));
        assert!(borrows_with(0x10, 0x00, true, 3));
    }
}
