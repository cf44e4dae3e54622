use crate::bits::split_u16;
use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::instruction::Reg16Stack;

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_push(&mut self, reg: Reg16Stack) -> Result<u32> {
        let value = self.read_reg16_stack(reg);
        self.push_u16(value)?;
        Ok(4)
    }

    /// `POP AF` drops the low nibble of F like any other write to it.
    pub(super) fn exec_pop(&mut self, reg: Reg16Stack) -> Result<u32> {
        let value = self.pop_u16()?;
        self.write_reg16_stack(reg, value);
        Ok(3)
    }

    /// `LD [a16],SP`: low byte at a16, high byte at a16+1.
    pub(super) fn exec_ld_a16_sp(&mut self) -> Result<u32> {
        let addr = self.fetch16()?;
        let (hi, lo) = split_u16(self.regs.sp);
        self.bus.write8(addr, lo)?;
        self.bus.write8(addr.wrapping_add(1), hi)?;
        Ok(5)
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        2
    }

    pub(super) fn exec_add_sp_e8(&mut self) -> Result<u32> {
        let imm = self.fetch8()?;
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        Ok(4)
    }

    pub(super) fn exec_ld_hl_sp_e8(&mut self) -> Result<u32> {
        let imm = self.fetch8()?;
        let value = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(value);
        Ok(3)
    }
}
