use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::instruction::{Instruction, Reg16, Reg16Mem, Reg8};

/// Base of the high page addressed by `LDH`.
const HIGH_PAGE: u16 = 0xFF00;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_ld_r8_d8(&mut self, dst: Reg8) -> Result<u32> {
        let value = self.fetch8()?;
        self.write_reg8(dst, value)?;
        Ok(if dst.is_memory() { 3 } else { 2 })
    }

    pub(super) fn exec_ld_r8_r8(&mut self, dst: Reg8, src: Reg8) -> Result<u32> {
        let value = self.read_reg8(src)?;
        self.write_reg8(dst, value)?;
        Ok(if dst.is_memory() || src.is_memory() {
            2
        } else {
            1
        })
    }

    pub(super) fn exec_ld_r16_d16(&mut self, dst: Reg16) -> Result<u32> {
        let value = self.fetch16()?;
        self.write_reg16(dst, value);
        Ok(3)
    }

    pub(super) fn exec_ld_mem_a(&mut self, mem: Reg16Mem) -> Result<u32> {
        let addr = self.reg16_mem_addr(mem);
        self.bus.write8(addr, self.regs.a)?;
        Ok(2)
    }

    pub(super) fn exec_ld_a_mem(&mut self, mem: Reg16Mem) -> Result<u32> {
        let addr = self.reg16_mem_addr(mem);
        self.regs.a = self.bus.read8(addr)?;
        Ok(2)
    }

    /// `LD [a16],A` and `LD A,[a16]`.
    pub(super) fn exec_ld_a16(&mut self, instruction: Instruction) -> Result<u32> {
        let addr = self.fetch16()?;
        match instruction {
            Instruction::LdA16A => self.bus.write8(addr, self.regs.a)?,
            Instruction::LdAA16 => self.regs.a = self.bus.read8(addr)?,
            _ => unreachable!(),
        }
        Ok(4)
    }

    /// Loads between A and the 0xFF00 page, offset by an immediate or by C.
    pub(super) fn exec_ldh(&mut self, instruction: Instruction) -> Result<u32> {
        match instruction {
            Instruction::LdhA8A => {
                let addr = HIGH_PAGE | u16::from(self.fetch8()?);
                self.bus.write8(addr, self.regs.a)?;
                Ok(3)
            }
            Instruction::LdhAA8 => {
                let addr = HIGH_PAGE | u16::from(self.fetch8()?);
                self.regs.a = self.bus.read8(addr)?;
                Ok(3)
            }
            Instruction::LdhCA => {
                let addr = HIGH_PAGE | u16::from(self.regs.c);
                self.bus.write8(addr, self.regs.a)?;
                Ok(2)
            }
            Instruction::LdhAC => {
                let addr = HIGH_PAGE | u16::from(self.regs.c);
                self.regs.a = self.bus.read8(addr)?;
                Ok(2)
            }
            _ => unreachable!(),
        }
    }
}
