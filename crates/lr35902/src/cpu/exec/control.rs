use crate::cpu::{Bus, Cpu};
use crate::error::Result;
use crate::instruction::{Condition, U3};

impl<B: Bus> Cpu<B> {
    #[inline]
    fn taken(&self, cond: Option<Condition>) -> bool {
        cond.map_or(true, |cond| self.condition(cond))
    }

    /// `JR e` / `JR cc,e`. The displacement is relative to the address
    /// following the operand. Always consumes the operand.
    pub(super) fn exec_jr(&mut self, cond: Option<Condition>) -> Result<u32> {
        let taken = self.taken(cond);
        let offset = self.fetch8()? as i8;
        if !taken {
            return Ok(2);
        }
        self.regs.pc = self.regs.pc.wrapping_add_signed(offset.into());
        Ok(3)
    }

    pub(super) fn exec_jp(&mut self, cond: Option<Condition>) -> Result<u32> {
        let taken = self.taken(cond);
        let addr = self.fetch16()?;
        if !taken {
            return Ok(3);
        }
        self.regs.pc = addr;
        Ok(4)
    }

    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        1
    }

    pub(super) fn exec_call(&mut self, cond: Option<Condition>) -> Result<u32> {
        let taken = self.taken(cond);
        let addr = self.fetch16()?;
        if !taken {
            return Ok(3);
        }
        self.push_u16(self.regs.pc)?;
        self.regs.pc = addr;
        Ok(6)
    }

    pub(super) fn exec_ret(&mut self) -> Result<u32> {
        self.regs.pc = self.pop_u16()?;
        Ok(4)
    }

    pub(super) fn exec_ret_cc(&mut self, cond: Condition) -> Result<u32> {
        if !self.condition(cond) {
            return Ok(2);
        }
        self.regs.pc = self.pop_u16()?;
        Ok(5)
    }

    /// Return and enable interrupts right away, with no `EI`-style delay.
    pub(super) fn exec_reti(&mut self) -> Result<u32> {
        self.regs.pc = self.pop_u16()?;
        self.ime = true;
        Ok(4)
    }

    pub(super) fn exec_rst(&mut self, slot: U3) -> Result<u32> {
        self.push_u16(self.regs.pc)?;
        self.regs.pc = u16::from(slot.get()) * 8;
        Ok(4)
    }
}
