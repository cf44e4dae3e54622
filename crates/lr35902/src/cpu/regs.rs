use bitflags::bitflags;

use crate::bits::{join_u16, split_u16};

bitflags! {
    /// Flag bits in the F register. Bits 0-3 do not exist and read as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0b1000_0000;
        const SUBTRACTION = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY = 0b0001_0000;
    }
}

/// The LR35902 register file.
///
/// The eight 8-bit registers pair up as AF, BC, DE and HL, high byte
/// first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        join_u16(self.a, self.f.bits())
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let (a, f) = split_u16(value);
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        join_u16(self.b, self.c)
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        (self.b, self.c) = split_u16(value);
    }

    #[inline]
    pub fn de(&self) -> u16 {
        join_u16(self.d, self.e)
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        (self.d, self.e) = split_u16(value);
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        join_u16(self.h, self.l)
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        (self.h, self.l) = split_u16(value);
    }
}
