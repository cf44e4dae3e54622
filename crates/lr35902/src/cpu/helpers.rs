use crate::bits::{join_u16, split_u16};
use crate::error::Result;
use crate::instruction::{Condition, Reg16, Reg16Mem, Reg16Stack, Reg8};

use super::{Bus, Cpu, Flags};

impl<B: Bus> Cpu<B> {
    /// Read an 8-bit register, or the byte at HL for [`Reg8::HlPtr`].
    #[inline]
    pub(super) fn read_reg8(&mut self, reg: Reg8) -> Result<u8> {
        Ok(match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlPtr => self.bus.read8(self.regs.hl())?,
            Reg8::A => self.regs.a,
        })
    }

    #[inline]
    pub(super) fn write_reg8(&mut self, reg: Reg8, value: u8) -> Result<()> {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlPtr => self.bus.write8(self.regs.hl(), value)?,
            Reg8::A => self.regs.a = value,
        }
        Ok(())
    }

    #[inline]
    pub(super) fn read_reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn read_reg16_stack(&self, reg: Reg16Stack) -> u16 {
        match reg {
            Reg16Stack::BC => self.regs.bc(),
            Reg16Stack::DE => self.regs.de(),
            Reg16Stack::HL => self.regs.hl(),
            Reg16Stack::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_reg16_stack(&mut self, reg: Reg16Stack, value: u16) {
        match reg {
            Reg16Stack::BC => self.regs.set_bc(value),
            Reg16Stack::DE => self.regs.set_de(value),
            Reg16Stack::HL => self.regs.set_hl(value),
            Reg16Stack::AF => self.regs.set_af(value),
        }
    }

    /// Resolve an indirect `[rr]` operand to its address, applying the HL
    /// post-increment/decrement.
    #[inline]
    pub(super) fn reg16_mem_addr(&mut self, reg: Reg16Mem) -> u16 {
        match reg {
            Reg16Mem::BC => self.regs.bc(),
            Reg16Mem::DE => self.regs.de(),
            Reg16Mem::HLInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            Reg16Mem::HLDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Condition) -> bool {
        match cond {
            Condition::NZ => !self.flag(Flags::ZERO),
            Condition::Z => self.flag(Flags::ZERO),
            Condition::NC => !self.flag(Flags::CARRY),
            Condition::C => self.flag(Flags::CARRY),
        }
    }

    /// Fetch the opcode byte at PC.
    ///
    /// The first fetch after the halt bug was armed reads the byte but
    /// leaves PC where it was.
    #[inline]
    pub(super) fn fetch_opcode(&mut self) -> Result<u8> {
        let value = self.bus.read8(self.regs.pc)?;
        if self.halt_bug {
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        Ok(value)
    }

    /// Fetch an operand byte at PC.
    #[inline]
    pub(super) fn fetch8(&mut self) -> Result<u8> {
        let value = self.bus.read8(self.regs.pc)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(value)
    }

    /// Fetch a little-endian 16-bit operand.
    #[inline]
    pub(super) fn fetch16(&mut self) -> Result<u16> {
        let lo = self.fetch8()?;
        let hi = self.fetch8()?;
        Ok(join_u16(hi, lo))
    }

    /// Push high byte first, so the low byte ends up at the lower address.
    #[inline]
    pub(super) fn push_u16(&mut self, value: u16) -> Result<()> {
        let (hi, lo) = split_u16(value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, hi)?;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.bus.write8(self.regs.sp, lo)?;
        Ok(())
    }

    #[inline]
    pub(super) fn pop_u16(&mut self) -> Result<u16> {
        let lo = self.bus.read8(self.regs.sp)?;
        let hi = self.bus.read8(self.regs.sp.wrapping_add(1))?;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        Ok(join_u16(hi, lo))
    }
}
