use crate::cpu::{Bus, Cpu, Flags};
use crate::error::Result;
use crate::instruction::{AluOp, Instruction, Reg8, RotateOp};

impl<B: Bus> Cpu<B> {
    pub(super) fn exec_alu_reg(&mut self, op: AluOp, src: Reg8) -> Result<u32> {
        let value = self.read_reg8(src)?;
        self.alu(op, value);
        Ok(if src.is_memory() { 2 } else { 1 })
    }

    pub(super) fn exec_alu_imm(&mut self, op: AluOp) -> Result<u32> {
        let value = self.fetch8()?;
        self.alu(op, value);
        Ok(2)
    }

    /// RLCA/RRCA/RLA/RRA. Unlike the CB forms, Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, instruction: Instruction) -> u32 {
        let op = match instruction {
            Instruction::Rlca => RotateOp::Rlc,
            Instruction::Rrca => RotateOp::Rrc,
            Instruction::Rla => RotateOp::Rl,
            Instruction::Rra => RotateOp::Rr,
            _ => unreachable!(),
        };
        self.regs.a = self.rotate(op, self.regs.a);
        self.set_flag(Flags::ZERO, false);
        1
    }

    pub(super) fn exec_misc_alu(&mut self, instruction: Instruction) -> u32 {
        match instruction {
            Instruction::Daa => self.alu_daa(),
            Instruction::Cpl => {
                self.regs.a = !self.regs.a;
                self.set_flag(Flags::SUBTRACTION, true);
                self.set_flag(Flags::HALF_CARRY, true);
            }
            Instruction::Scf => {
                self.set_flag(Flags::SUBTRACTION, false);
                self.set_flag(Flags::HALF_CARRY, false);
                self.set_flag(Flags::CARRY, true);
            }
            Instruction::Ccf => {
                let carry = self.flag(Flags::CARRY);
                self.set_flag(Flags::SUBTRACTION, false);
                self.set_flag(Flags::HALF_CARRY, false);
                self.set_flag(Flags::CARRY, !carry);
            }
            _ => unreachable!(),
        }
        1
    }
}
