use log::trace;

use crate::bits::{get_bit, set_bit};
use crate::decode::decode_prefixed;
use crate::error::Result;
use crate::instruction::PrefixedInstruction;

use super::{Bus, Cpu, Flags};

impl<B: Bus> Cpu<B> {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// Cycle counts include the prefix byte: 2 for a register, 4 for
    /// `[HL]`, and 3 for `BIT b,[HL]` which never writes back.
    pub(super) fn step_cb(&mut self) -> Result<u32> {
        let opcode = self.fetch8()?;
        let instruction = decode_prefixed(opcode);
        trace!("  CB {:02X}: {}", opcode, instruction);

        let target = instruction.target();
        let value = self.read_reg8(target)?;

        let result = match instruction {
            PrefixedInstruction::Rotate { op, .. } => self.rotate(op, value),
            PrefixedInstruction::Bit { bit, .. } => {
                self.set_flag(Flags::ZERO, !get_bit(value, bit.get()));
                self.set_flag(Flags::SUBTRACTION, false);
                self.set_flag(Flags::HALF_CARRY, true);
                return Ok(if target.is_memory() { 3 } else { 2 });
            }
            PrefixedInstruction::Res { bit, .. } => set_bit(value, bit.get(), false),
            PrefixedInstruction::Set { bit, .. } => set_bit(value, bit.get(), true),
        };

        self.write_reg8(target, result)?;
        Ok(if target.is_memory() { 4 } else { 2 })
    }
}
