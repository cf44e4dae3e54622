use crate::error::Result;
use crate::instruction::Instruction;

use super::{Bus, Cpu};

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

impl<B: Bus> Cpu<B> {
    /// Execute one decoded instruction whose opcode has already been
    /// fetched. Returns its cost in M-cycles.
    pub(super) fn execute(&mut self, instruction: Instruction) -> Result<u32> {
        use Instruction::*;

        match instruction {
            Nop => Ok(1),
            Stop => self.exec_stop(),
            Halt => self.exec_halt(),
            Di => Ok(self.exec_di()),
            Ei => Ok(self.exec_ei()),

            Daa | Cpl | Scf | Ccf => Ok(self.exec_misc_alu(instruction)),
            Rlca | Rrca | Rla | Rra => Ok(self.exec_rotate_a(instruction)),
            Alu { op, src } => self.exec_alu_reg(op, src),
            AluD8(op) => self.exec_alu_imm(op),

            LdR8D8(dst) => self.exec_ld_r8_d8(dst),
            LdR8R8 { dst, src } => self.exec_ld_r8_r8(dst, src),
            LdR16D16(dst) => self.exec_ld_r16_d16(dst),
            LdMemA(mem) => self.exec_ld_mem_a(mem),
            LdAMem(mem) => self.exec_ld_a_mem(mem),
            LdA16A | LdAA16 => self.exec_ld_a16(instruction),
            LdhA8A | LdhAA8 | LdhCA | LdhAC => self.exec_ldh(instruction),

            IncR8(reg) => self.exec_inc_r8(reg),
            DecR8(reg) => self.exec_dec_r8(reg),
            IncR16(reg) => Ok(self.exec_inc_r16(reg)),
            DecR16(reg) => Ok(self.exec_dec_r16(reg)),
            AddHlR16(reg) => Ok(self.exec_add_hl(reg)),

            Push(reg) => self.exec_push(reg),
            Pop(reg) => self.exec_pop(reg),
            LdA16Sp => self.exec_ld_a16_sp(),
            LdSpHl => Ok(self.exec_ld_sp_hl()),
            AddSpE8 => self.exec_add_sp_e8(),
            LdHlSpE8 => self.exec_ld_hl_sp_e8(),

            Jr => self.exec_jr(None),
            JrCc(cond) => self.exec_jr(Some(cond)),
            Jp => self.exec_jp(None),
            JpCc(cond) => self.exec_jp(Some(cond)),
            JpHl => Ok(self.exec_jp_hl()),
            Call => self.exec_call(None),
            CallCc(cond) => self.exec_call(Some(cond)),
            Ret => self.exec_ret(),
            RetCc(cond) => self.exec_ret_cc(cond),
            Reti => self.exec_reti(),
            Rst(slot) => self.exec_rst(slot),

            Prefix => self.step_cb(),
        }
    }
}
