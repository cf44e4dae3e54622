use crate::bits::{borrows, borrows_with, carries, carries_with};
use crate::instruction::{AluOp, RotateOp};

use super::{Bus, Cpu, Flags};

impl<B: Bus> Cpu<B> {
    /// Apply one of the eight accumulator operations to A and `value`.
    pub(super) fn alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = use_carry && self.flag(Flags::CARRY);
        let result = a.wrapping_add(value).wrapping_add(carry_in as u8);

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(
            Flags::HALF_CARRY,
            carries_with(a.into(), value.into(), carry_in, 3),
        );
        self.set_flag(Flags::CARRY, carries_with(a.into(), value.into(), carry_in, 7));
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let borrow_in = use_carry && self.flag(Flags::CARRY);
        let result = a.wrapping_sub(value).wrapping_sub(borrow_in as u8);

        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACTION, true);
        self.set_flag(
            Flags::HALF_CARRY,
            borrows_with(a.into(), value.into(), borrow_in, 3),
        );
        self.set_flag(Flags::CARRY, borrows_with(a.into(), value.into(), borrow_in, 7));
    }

    #[inline]
    fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::HALF_CARRY, true);
    }

    #[inline]
    fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
    }

    #[inline]
    fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
    }

    /// Flags as for `A - value`; A is left alone.
    #[inline]
    fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.alu_sub(value, false);
        self.regs.a = a;
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Uses C, H, N and A to compute a correction; updates A, Z, H, C and
    /// leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.flag(Flags::CARRY) { 0x60 } else { 0x00 };
        if self.flag(Flags::HALF_CARRY) {
            adjust |= 0x06;
        }

        if !self.flag(Flags::SUBTRACTION) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flags::CARRY, adjust >= 0x60);
        self.set_flag(Flags::HALF_CARRY, false);
        self.set_flag(Flags::ZERO, a == 0);
        self.regs.a = a;
    }

    /// INC r / INC [HL]. C is unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACTION, false);
        self.set_flag(Flags::HALF_CARRY, carries(value.into(), 1, 3));
        result
    }

    /// DEC r / DEC [HL]. C is unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::SUBTRACTION, true);
        self.set_flag(Flags::HALF_CARRY, borrows(value.into(), 1, 3));
        result
    }

    /// `ADD HL,rr`: Z unaffected, N cleared, H and C out of bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();

        self.set_flag(Flags::SUBTRACTION, false);
        self.set_flag(Flags::HALF_CARRY, carries(hl, value, 11));
        self.set_flag(Flags::CARRY, carries(hl, value, 15));

        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// Signed 8-bit offset added to a 16-bit base, for `ADD SP,e` and
    /// `LD HL,SP+e`.
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte addition.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.clear_flags();
        self.set_flag(Flags::HALF_CARRY, carries(base, imm8.into(), 3));
        self.set_flag(Flags::CARRY, carries(base, imm8.into(), 7));
        base.wrapping_add(offset)
    }

    /// Shared body of RLCA/RRCA/RLA/RRA and the CB rotates and shifts.
    /// Returns the result; Z is set from it, N and H cleared, C from the
    /// bit shifted out.
    pub(super) fn rotate(&mut self, op: RotateOp, value: u8) -> u8 {
        use RotateOp::*;

        let carry_in = self.flag(Flags::CARRY) as u8;
        let (result, carry_out) = match op {
            Rlc => (value.rotate_left(1), value & 0x80 != 0),
            Rrc => (value.rotate_right(1), value & 0x01 != 0),
            Rl => ((value << 1) | carry_in, value & 0x80 != 0),
            Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
            Sla => (value << 1, value & 0x80 != 0),
            Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            Swap => (value.rotate_left(4), false),
            Srl => (value >> 1, value & 0x01 != 0),
        };

        self.clear_flags();
        self.set_flag(Flags::ZERO, result == 0);
        self.set_flag(Flags::CARRY, carry_out);
        result
    }
}
