use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::instruction::{Reg16, Reg8};

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_inc_r8(&mut self, reg: Reg8) -> Result<u32> {
        let value = self.read_reg8(reg)?;
        let result = self.alu_inc8(value);
        self.write_reg8(reg, result)?;
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    pub(super) fn exec_dec_r8(&mut self, reg: Reg8) -> Result<u32> {
        let value = self.read_reg8(reg)?;
        let result = self.alu_dec8(value);
        self.write_reg8(reg, result)?;
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    /// 16-bit INC/DEC leave the flags alone.
    pub(super) fn exec_inc_r16(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg).wrapping_add(1);
        self.write_reg16(reg, value);
        2
    }

    pub(super) fn exec_dec_r16(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg).wrapping_sub(1);
        self.write_reg16(reg, value);
        2
    }

    pub(super) fn exec_add_hl(&mut self, reg: Reg16) -> u32 {
        let value = self.read_reg16(reg);
        self.alu_add16_hl(value);
        2
    }
}
